use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand, ValueEnum};
use dhruv_career::{AnalysisRequest, CareerConfig, analyze, profession_summary};
use dhruv_vedic_base::{
    Amsha, BirthRequest, Chart, Graha, StaticProvider, amsha_longitude, ashtakavarga,
    bhukti_table, current_dasha, derive_chart, fetch_chart, nakshatra_from_longitude,
    planets_aspecting_graha, planets_aspecting_house, rashi_from_longitude, vimshottari_table,
};
use log::debug;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "dhruv", about = "Vedic chart tools and career analysis")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Division {
    D9,
    D10,
}

impl From<Division> for Amsha {
    fn from(d: Division) -> Self {
        match d {
            Division::D9 => Amsha::D9,
            Division::D10 => Amsha::D10,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Rashi and DMS of a sidereal longitude
    Rashi {
        /// Sidereal longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Nakshatra and pada of a sidereal longitude
    Nakshatra {
        /// Sidereal longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Navamsha or Dasamsa longitude; derives the whole chart with --chart
    Amsha {
        /// Sidereal longitude in degrees
        #[arg(allow_negative_numbers = true, required_unless_present = "chart")]
        lon: Option<f64>,
        #[arg(long, value_enum, default_value = "d9")]
        division: Division,
        /// D1 chart JSON file
        #[arg(long)]
        chart: Option<PathBuf>,
    },
    /// Vimshottari Mahadasha table with Bhuktis
    Dasha {
        /// D1 chart JSON file
        #[arg(long)]
        chart: PathBuf,
        /// Birth instant (overrides the chart's), e.g. 1990-01-15T04:30:00
        #[arg(long, value_parser = parse_instant)]
        birth: Option<NaiveDateTime>,
        /// Include the Bhukti table
        #[arg(long)]
        bhuktis: bool,
    },
    /// Running Mahadasha and Bhukti at an instant
    CurrentDasha {
        /// D1 chart JSON file
        #[arg(long)]
        chart: PathBuf,
        /// Query instant; defaults to now
        #[arg(long, value_parser = parse_instant)]
        at: Option<NaiveDateTime>,
        /// Birth instant (overrides the chart's)
        #[arg(long, value_parser = parse_instant)]
        birth: Option<NaiveDateTime>,
    },
    /// Bhinna and Sarva Ashtakavarga of a chart
    Ashtakavarga {
        /// D1 chart JSON file
        #[arg(long)]
        chart: PathBuf,
    },
    /// Grahas occupying or aspecting a house or a graha
    Aspects {
        /// D1 chart JSON file
        #[arg(long)]
        chart: PathBuf,
        /// Whole-sign house 1-12
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=12), required_unless_present = "graha")]
        house: Option<u8>,
        /// Target graha (Sanskrit or English name)
        #[arg(long, value_parser = parse_graha, conflicts_with = "house")]
        graha: Option<Graha>,
    },
    /// Full career analysis report
    Career {
        /// D1 chart JSON file
        #[arg(long)]
        chart: PathBuf,
        /// Query instant for the running dasha; defaults to now
        #[arg(long, value_parser = parse_instant)]
        at: Option<NaiveDateTime>,
        /// Print a short text summary instead of JSON
        #[arg(long)]
        brief: bool,
    },
    /// Ranked profession probabilities
    Professions {
        /// D1 chart JSON file
        #[arg(long)]
        chart: PathBuf,
    },
}

fn parse_instant(s: &str) -> Result<NaiveDateTime, String> {
    let s = s.trim();
    let s = s.strip_suffix('Z').unwrap_or(s);
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| format!("invalid instant '{s}', expected YYYY-MM-DDTHH:MM:SS"))
}

fn parse_graha(s: &str) -> Result<Graha, String> {
    Graha::from_name(s).map_err(|e| e.to_string())
}

fn now() -> NaiveDateTime {
    chrono::Utc::now().naive_utc()
}

/// Birth request carried alongside a stored chart; unknown fields fall back to neutral values.
fn birth_request(chart: &Chart) -> BirthRequest {
    let meta = chart.meta();
    let birth = meta.birth.unwrap_or_default();
    BirthRequest {
        date: birth.date(),
        time: birth.time(),
        latitude: meta.latitude.unwrap_or(0.0),
        longitude: meta.longitude.unwrap_or(0.0),
        timezone: meta.timezone.clone().unwrap_or_else(|| "+00:00".to_string()),
    }
}

fn load_chart(path: &Path) -> Result<Chart> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading chart {}", path.display()))?;
    let chart: Chart = serde_json::from_str(&text)
        .with_context(|| format!("parsing chart {}", path.display()))?;
    let request = birth_request(&chart);
    let chart = fetch_chart(&StaticProvider::new(chart), &request)
        .with_context(|| format!("chart {} is unusable", path.display()))?;
    debug!("loaded {} points from {}", chart.len(), path.display());
    Ok(chart)
}

fn birth_of(chart: &Chart, explicit: Option<NaiveDateTime>) -> Result<NaiveDateTime> {
    match explicit.or(chart.meta().birth) {
        Some(b) => Ok(b),
        None => bail!("no birth instant: pass --birth or set meta.birth in the chart"),
    }
}

fn moon_of(chart: &Chart) -> Result<f64> {
    chart
        .longitude(Graha::Chandra)
        .context("chart has no Moon position")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CareerConfig::load_or_default(cli.config.as_deref())
        .context("loading configuration")?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log.level))
        .init();

    match cli.command {
        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            println!(
                "{} ({}) {}°{}'{:.2}\" [{:.4} deg in rashi]",
                info.rashi.name(),
                info.rashi.western_name(),
                info.dms.degrees,
                info.dms.minutes,
                info.dms.seconds,
                info.degrees_in_rashi
            );
            println!(
                "lord {}, {} {}",
                info.rashi.lord().name(),
                info.rashi.element().name(),
                info.rashi.motion_class().name()
            );
        }
        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} pada {} (lord {}) {:.4} deg in, {:.1}% elapsed",
                info.nakshatra.name(),
                info.pada,
                info.lord.name(),
                info.degrees_in_nakshatra,
                info.fraction_elapsed * 100.0
            );
        }
        Commands::Amsha {
            lon,
            division,
            chart,
        } => match chart {
            Some(path) => {
                let d1 = load_chart(&path)?;
                print_json(&derive_chart(&d1, division.into())?)?;
            }
            None => {
                let lon = lon.context("longitude required without --chart")?;
                let out = amsha_longitude(lon, division.into());
                let info = rashi_from_longitude(out);
                println!("{out:.6} deg = {} {:.4}", info.rashi, info.degrees_in_rashi);
            }
        },
        Commands::Dasha {
            chart,
            birth,
            bhuktis,
        } => {
            let d1 = load_chart(&chart)?;
            let table = vimshottari_table(
                birth_of(&d1, birth)?,
                moon_of(&d1)?,
                config.dasha.total_years,
            )?;
            if bhuktis {
                let sub = bhukti_table(&table)?;
                print_json(&serde_json::json!({ "mahadashas": table, "bhuktis": sub }))?;
            } else {
                print_json(&table)?;
            }
        }
        Commands::CurrentDasha { chart, at, birth } => {
            let d1 = load_chart(&chart)?;
            let cur = current_dasha(
                birth_of(&d1, birth)?,
                moon_of(&d1)?,
                at.unwrap_or_else(now),
                config.dasha.total_years,
            )?;
            println!("{cur}");
        }
        Commands::Ashtakavarga { chart } => {
            let d1 = load_chart(&chart)?;
            let grid = ashtakavarga(&d1).context("Ashtakavarga needs Sun, Moon and Lagna")?;
            print_json(&grid)?;
        }
        Commands::Aspects {
            chart,
            house,
            graha,
        } => {
            let d1 = load_chart(&chart)?;
            let hits = match (house, graha) {
                (_, Some(g)) => planets_aspecting_graha(&d1, g),
                (Some(h), None) => planets_aspecting_house(&d1, h),
                (None, None) => bail!("pass --house or --graha"),
            };
            print_json(&hits)?;
        }
        Commands::Career { chart, at, brief } => {
            let d1 = load_chart(&chart)?;
            let request = AnalysisRequest::at(at.unwrap_or_else(now));
            let report = analyze(&d1, &request, &config)?;
            if brief {
                println!(
                    "strength {} (rules score {}, {}/{} rules matched)",
                    report.verdict.career_strength.as_str(),
                    report.verdict.rules_score,
                    report.verdict.matched_count(),
                    report.verdict.rules_checklist.len()
                );
                if let Some(cur) = &report.current_dasha {
                    println!("dasha {cur}");
                }
                for p in &report.professions.top_professions {
                    println!("{:>5.1}%  {}", p.probability, p.name);
                }
            } else {
                print_json(&report)?;
            }
        }
        Commands::Professions { chart } => {
            let d1 = load_chart(&chart)?;
            print_json(&profession_summary(&d1, &config.profession))?;
        }
    }
    Ok(())
}

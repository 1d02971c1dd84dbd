//! Profession categories and their classical indicators.

use dhruv_vedic_base::{Graha, Nakshatra, Rashi};

/// Two grahas whose joint presence adds (or removes) probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfessionYoga {
    pub name: &'static str,
    pub grahas: [Graha; 2],
    pub bonus: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfessionCategory {
    pub name: &'static str,
    pub description: &'static str,
    pub primary: &'static [Graha],
    pub secondary: &'static [Graha],
    pub rashis: &'static [Rashi],
    pub nakshatras: &'static [Nakshatra],
    pub yogas: &'static [ProfessionYoga],
}

const fn yoga(name: &'static str, a: Graha, b: Graha, bonus: f64) -> ProfessionYoga {
    ProfessionYoga {
        name,
        grahas: [a, b],
        bonus,
    }
}

use Graha::*;
use Nakshatra as N;
use Rashi as R;

/// All categories in reporting order.
pub static PROFESSIONS: [ProfessionCategory; 10] = [
    ProfessionCategory {
        name: "Technology/IT/Software",
        description: "Software, IT, Engineering, Data Science, AI/ML, Tech CEO",
        primary: &[Buddh, Rahu, Shani, Mangal],
        secondary: &[Guru, Shukra],
        rashis: &[R::Mithuna, R::Kanya, R::Kumbha, R::Vrischika],
        nakshatras: &[
            N::Ashlesha,
            N::Jyeshtha,
            N::Revati,
            N::Shatabhisha,
            N::Swati,
            N::Mrigashira,
            N::Punarvasu,
            N::Chitra,
        ],
        yogas: &[
            yoga("Tech Business Leadership Yoga", Buddh, Guru, 30.0),
            yoga("Tech Engineering Yoga", Buddh, Mangal, 30.0),
            yoga("Tech Design/UX Yoga", Mangal, Shukra, 25.0),
            yoga("Creative Tech/Design Yoga", Buddh, Shukra, 25.0),
            yoga("Tech Innovation Yoga", Buddh, Rahu, 25.0),
            yoga("Systematic Tech Yoga", Buddh, Shani, 20.0),
        ],
    },
    ProfessionCategory {
        name: "Business/Corporate Leadership",
        description: "CEO, Business Management, Entrepreneurship, Corporate",
        primary: &[Surya, Buddh, Guru],
        secondary: &[Shukra, Mangal],
        rashis: &[R::Simha, R::Dhanu, R::Makara],
        nakshatras: &[
            N::Pushya,
            N::UttaraPhalguni,
            N::UttaraAshadha,
            N::Ashlesha,
            N::Rohini,
        ],
        yogas: &[
            yoga("Budha-Aditya Yoga (Leadership)", Surya, Buddh, 30.0),
            yoga("Budha-Guru Yoga (Business Wisdom)", Buddh, Guru, 35.0),
            yoga("Guru-Aditya Yoga (Authority)", Surya, Guru, 25.0),
        ],
    },
    ProfessionCategory {
        name: "Finance/Banking/Investment",
        description: "Banking, Finance, Investment, Accounting, Stock Market",
        primary: &[Shukra, Guru, Buddh],
        secondary: &[Chandra],
        rashis: &[R::Vrishabha, R::Tula, R::Dhanu],
        nakshatras: &[
            N::Rohini,
            N::Pushya,
            N::UttaraPhalguni,
            N::PurvaBhadrapada,
        ],
        yogas: &[
            yoga("Lakshmi Yoga (Wealth)", Shukra, Guru, 30.0),
            yoga("Financial Wisdom Yoga", Buddh, Guru, 25.0),
        ],
    },
    ProfessionCategory {
        name: "Government/Administration/Politics",
        description: "Government Service, Politics, Public Administration, IAS/IPS",
        primary: &[Surya, Shani, Guru],
        secondary: &[Mangal, Rahu],
        rashis: &[R::Simha, R::Makara, R::Dhanu],
        nakshatras: &[
            N::Krittika,
            N::Magha,
            N::UttaraPhalguni,
            N::UttaraAshadha,
            N::UttaraBhadrapada,
        ],
        yogas: &[
            yoga("Administrative Yoga", Surya, Shani, 25.0),
            yoga("Political Power Yoga", Surya, Rahu, 30.0),
        ],
    },
    ProfessionCategory {
        name: "Medicine/Healthcare",
        description: "Doctor, Healthcare, Medicine, Surgery, Nursing",
        primary: &[Chandra, Ketu, Mangal],
        secondary: &[Guru, Shukra],
        rashis: &[R::Karka, R::Vrischika, R::Meena, R::Kanya],
        nakshatras: &[N::Ashwini, N::Rohini, N::Ardra, N::Pushya, N::Hasta],
        yogas: &[
            yoga("Surgeon Yoga", Chandra, Mangal, 25.0),
            yoga("Healer Yoga", Chandra, Ketu, 20.0),
        ],
    },
    ProfessionCategory {
        name: "Teaching/Education/Research",
        description: "Professor, Teacher, Academic Research, Training",
        primary: &[Guru, Buddh],
        secondary: &[Chandra],
        rashis: &[R::Dhanu, R::Meena, R::Mithuna],
        nakshatras: &[
            N::Punarvasu,
            N::Vishakha,
            N::PurvaBhadrapada,
            N::Revati,
        ],
        yogas: &[
            yoga("Gajakesari Yoga (Teacher)", Guru, Chandra, 25.0),
            yoga("Business over Teaching", Guru, Buddh, -15.0),
        ],
    },
    ProfessionCategory {
        name: "Arts/Media/Entertainment",
        description: "Acting, Music, Writing, Media, Journalism, Creative Arts",
        primary: &[Shukra, Chandra, Buddh],
        secondary: &[Rahu],
        rashis: &[R::Vrishabha, R::Tula, R::Meena, R::Karka],
        nakshatras: &[
            N::Bharani,
            N::Rohini,
            N::PurvaPhalguni,
            N::Revati,
            N::Ashwini,
        ],
        yogas: &[
            yoga("Creative Arts Yoga", Shukra, Chandra, 30.0),
            yoga("Fame/Cinema Yoga", Shukra, Rahu, 25.0),
        ],
    },
    ProfessionCategory {
        name: "Law/Judiciary",
        description: "Lawyer, Judge, Legal Services, Court",
        primary: &[Guru, Shani, Surya],
        secondary: &[Buddh],
        rashis: &[R::Dhanu, R::Makara, R::Tula],
        nakshatras: &[
            N::UttaraAshadha,
            N::UttaraBhadrapada,
            N::Pushya,
            N::Swati,
        ],
        yogas: &[yoga("Justice Yoga", Guru, Shani, 30.0)],
    },
    ProfessionCategory {
        name: "Sales/Marketing/Communication",
        description: "Sales, Marketing, PR, Communication, Consulting",
        primary: &[Buddh, Shukra, Chandra],
        secondary: &[Guru],
        rashis: &[R::Mithuna, R::Kanya, R::Tula],
        nakshatras: &[N::Ashlesha, N::Jyeshtha, N::Mrigashira, N::Ardra],
        yogas: &[yoga("Communication Excellence Yoga", Buddh, Shukra, 25.0)],
    },
    ProfessionCategory {
        name: "Sports/Military/Defense",
        description: "Sports, Military, Police, Defense, Athletics",
        primary: &[Mangal, Surya],
        secondary: &[Shani, Ketu],
        rashis: &[R::Mesha, R::Vrischika, R::Simha],
        nakshatras: &[N::Mrigashira, N::Ardra, N::Magha, N::Mula, N::Dhanishtha],
        yogas: &[yoga("Warrior Yoga", Mangal, Surya, 35.0)],
    },
];

/// Category by its display name.
pub fn profession(name: &str) -> Option<&'static ProfessionCategory> {
    PROFESSIONS.iter().find(|p| p.name == name)
}

//! Seedable fake-data generation.
//!
//! `FakeGenerator` produces realistic-looking values for seeding model
//! fields. Every producer draws only from the generator's own RNG, so the
//! output sequence is a pure function of the last seed applied — nothing
//! reads the wall clock or process entropy after construction. There is no
//! shared global instance; the generator is owned by a `SeedingContext` and
//! passed explicitly to each seeder.

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

/// Locale the generator draws its word tables from.
///
/// Fixed at construction for the generator's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    EnGb,
    EnUs,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::EnGb => "en-GB",
            Locale::EnUs => "en-US",
        }
    }
}

const EN_GB_FIRST_NAMES: &[&str] = &[
    "Oliver", "George", "Harry", "Jack", "Charlie", "Alfie", "Arthur", "Henry", "Thomas", "Freddie",
    "Amelia", "Olivia", "Isla", "Emily", "Poppy", "Freya", "Sophie", "Daisy", "Evie", "Florence",
];

const EN_GB_LAST_NAMES: &[&str] = &[
    "Smith", "Jones", "Taylor", "Brown", "Williams", "Wilson", "Davies", "Evans", "Thomas",
    "Johnson", "Roberts", "Walker", "Wright", "Thompson", "White", "Hughes", "Edwards", "Green",
];

const EN_GB_TOWNS: &[&str] = &[
    "Leeds", "York", "Bristol", "Manchester", "Sheffield", "Norwich", "Bath", "Durham", "Exeter",
    "Brighton", "Cambridge", "Oxford", "Chester", "Lancaster", "Truro", "Carlisle",
];

const EN_GB_COUNTIES: &[&str] = &[
    "Kent", "Essex", "Surrey", "Devon", "Cornwall", "Norfolk", "Suffolk", "Cumbria", "Dorset",
    "Somerset", "Hampshire", "Wiltshire", "Derbyshire", "Northumberland",
];

const EN_GB_STREETS: &[&str] = &[
    "High Street", "Church Lane", "Station Road", "Victoria Road", "Mill Lane", "The Green",
    "Park Avenue", "London Road", "Queen's Road", "King Street", "Chapel Street", "Manor Road",
];

const EN_GB_COMPANY_PREFIXES: &[&str] = &[
    "Albion", "Pennine", "Riverside", "Granite", "Beacon", "Harbour", "Regent", "Sterling",
];

const EN_GB_COMPANY_SUFFIXES: &[&str] = &["Ltd", "Holdings", "Group", "Partners", "Trading Co"];

const EN_US_FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Charlie", "Diana", "Eve", "Frank", "Grace", "Henry", "Ivy", "Jack", "Kate",
    "Liam", "Mia", "Noah", "Olivia", "Peter", "Quinn", "Ruby", "Sam", "Tina",
];

const EN_US_LAST_NAMES: &[&str] = &[
    "Anderson", "Brown", "Davis", "Fisher", "Garcia", "Harris", "Johnson", "King", "Lopez",
    "Miller", "Nelson", "Parker", "Roberts", "Smith", "Taylor", "Williams", "Young", "Clark",
];

const EN_US_CITIES: &[&str] = &[
    "Springfield", "Riverside", "Franklin", "Georgetown", "Fairview", "Madison", "Arlington",
    "Salem", "Richmond", "Columbia", "Austin", "Denver", "Phoenix", "Portland", "Seattle",
];

const EN_US_STATES: &[&str] = &[
    "California", "Texas", "Florida", "New York", "Pennsylvania", "Illinois", "Ohio", "Georgia",
    "Michigan", "Virginia", "Washington", "Arizona", "Massachusetts", "Oregon",
];

const EN_US_STREETS: &[&str] = &[
    "Main St", "Oak Ave", "Elm Dr", "Park Blvd", "Cedar Ln", "Maple Way", "Pine St", "River Rd",
    "Hill Ave", "Lake Dr", "Forest Ln", "Garden St", "Valley Rd", "Sunset Blvd",
];

const EN_US_COMPANY_PREFIXES: &[&str] = &[
    "Acme", "Global", "United", "Premium", "Elite", "Advanced", "Dynamic", "Summit",
];

const EN_US_COMPANY_SUFFIXES: &[&str] = &["Corp", "Inc", "LLC", "Solutions", "Systems", "Group"];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];

const USERNAME_ADJECTIVES: &[&str] = &["swift", "quiet", "bright", "bold", "keen", "steady"];

const USERNAME_NOUNS: &[&str] = &["otter", "falcon", "willow", "harbor", "summit", "meadow"];

const SENTENCE_SUBJECTS: &[&str] = &[
    "The user", "The system", "The application", "The service", "The platform",
];

const SENTENCE_VERBS: &[&str] = &["creates", "updates", "processes", "manages", "handles"];

const SENTENCE_OBJECTS: &[&str] = &[
    "data", "information", "content", "resources", "functionality",
];

const URL_PATHS: &[&str] = &["/", "/home", "/dashboard", "/profile", "/settings", "/api/v1"];

// Letters valid in the alpha positions of a UK postcode outward code.
const POSTCODE_LETTERS: &[u8] = b"ABCDEFGHJKLMNPRSTUVWXY";

/// Fake-value producer with an explicitly seedable RNG.
pub struct FakeGenerator {
    locale: Locale,
    rng: StdRng,
}

impl FakeGenerator {
    /// Create a generator for the given locale, seeded from entropy.
    ///
    /// Call [`seed`](Self::seed) before generating when reproducibility
    /// matters; seeder runners do this automatically.
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Reset the RNG state in place.
    ///
    /// The generator's identity and locale are unchanged; only the
    /// pseudo-random sequence restarts. Reseeding with the same value
    /// restores the same sequence.
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn first_name(&mut self) -> String {
        let table = match self.locale {
            Locale::EnGb => EN_GB_FIRST_NAMES,
            Locale::EnUs => EN_US_FIRST_NAMES,
        };
        table.choose(&mut self.rng).unwrap().to_string()
    }

    pub fn last_name(&mut self) -> String {
        let table = match self.locale {
            Locale::EnGb => EN_GB_LAST_NAMES,
            Locale::EnUs => EN_US_LAST_NAMES,
        };
        table.choose(&mut self.rng).unwrap().to_string()
    }

    pub fn full_name(&mut self) -> String {
        format!("{} {}", self.first_name(), self.last_name())
    }

    pub fn email(&mut self) -> String {
        let name = self.first_name().to_lowercase();
        let number = self.number_between(1, 999);
        let domain = EMAIL_DOMAINS.choose(&mut self.rng).unwrap();
        format!("{}{:03}@{}", name, number, domain)
    }

    pub fn username(&mut self) -> String {
        let adjective = USERNAME_ADJECTIVES.choose(&mut self.rng).unwrap();
        let noun = USERNAME_NOUNS.choose(&mut self.rng).unwrap();
        let number = self.number_between(1, 999);
        format!("{}{}{}", adjective, noun, number)
    }

    pub fn company(&mut self) -> String {
        let (prefixes, suffixes) = match self.locale {
            Locale::EnGb => (EN_GB_COMPANY_PREFIXES, EN_GB_COMPANY_SUFFIXES),
            Locale::EnUs => (EN_US_COMPANY_PREFIXES, EN_US_COMPANY_SUFFIXES),
        };
        let prefix = prefixes.choose(&mut self.rng).unwrap();
        let suffix = suffixes.choose(&mut self.rng).unwrap();
        format!("{} {}", prefix, suffix)
    }

    pub fn phone_number(&mut self) -> String {
        match self.locale {
            Locale::EnGb => format!(
                "+44 7{:03} {:06}",
                self.rng.gen_range(100..=999),
                self.rng.gen_range(0..=999_999)
            ),
            Locale::EnUs => format!(
                "({}) {}-{}",
                self.rng.gen_range(200..=999),
                self.rng.gen_range(200..=999),
                self.rng.gen_range(1000..=9999)
            ),
        }
    }

    pub fn street_address(&mut self) -> String {
        let streets = match self.locale {
            Locale::EnGb => EN_GB_STREETS,
            Locale::EnUs => EN_US_STREETS,
        };
        let number = self.rng.gen_range(1..=200);
        let street = streets.choose(&mut self.rng).unwrap();
        format!("{} {}", number, street)
    }

    pub fn city(&mut self) -> String {
        let table = match self.locale {
            Locale::EnGb => EN_GB_TOWNS,
            Locale::EnUs => EN_US_CITIES,
        };
        table.choose(&mut self.rng).unwrap().to_string()
    }

    /// County for en-GB, state for en-US.
    pub fn county(&mut self) -> String {
        let table = match self.locale {
            Locale::EnGb => EN_GB_COUNTIES,
            Locale::EnUs => EN_US_STATES,
        };
        table.choose(&mut self.rng).unwrap().to_string()
    }

    /// Postal code in the locale's format: `AB1 2CD` for en-GB, a five
    /// digit ZIP for en-US.
    pub fn postcode(&mut self) -> String {
        match self.locale {
            Locale::EnGb => {
                let a = *POSTCODE_LETTERS.choose(&mut self.rng).unwrap() as char;
                let b = *POSTCODE_LETTERS.choose(&mut self.rng).unwrap() as char;
                let c = *POSTCODE_LETTERS.choose(&mut self.rng).unwrap() as char;
                let d = *POSTCODE_LETTERS.choose(&mut self.rng).unwrap() as char;
                format!(
                    "{}{}{} {}{}{}",
                    a,
                    b,
                    self.rng.gen_range(1..=9),
                    self.rng.gen_range(0..=9),
                    c,
                    d
                )
            }
            Locale::EnUs => format!("{:05}", self.rng.gen_range(10000..=99999)),
        }
    }

    pub fn sentence(&mut self) -> String {
        let subject = SENTENCE_SUBJECTS.choose(&mut self.rng).unwrap();
        let verb = SENTENCE_VERBS.choose(&mut self.rng).unwrap();
        let object = SENTENCE_OBJECTS.choose(&mut self.rng).unwrap();
        format!("{} {} {}.", subject, verb, object)
    }

    pub fn paragraph(&mut self) -> String {
        let count = self.rng.gen_range(3..=6);
        let sentences: Vec<String> = (0..count).map(|_| self.sentence()).collect();
        sentences.join(" ")
    }

    pub fn url(&mut self) -> String {
        let domain = EMAIL_DOMAINS.choose(&mut self.rng).unwrap();
        let path = URL_PATHS.choose(&mut self.rng).unwrap();
        format!("https://www.{}{}", domain, path)
    }

    /// Version 4 UUID built from the generator's RNG, so the sequence stays
    /// reproducible under a fixed seed.
    pub fn uuid(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill(&mut bytes[..]);
        uuid::Builder::from_random_bytes(bytes).into_uuid()
    }

    /// Date of birth for an adult somewhere between 18 and 80 years old.
    ///
    /// Ages are measured against a fixed anchor date; the wall clock never
    /// feeds the sequence.
    pub fn date_of_birth(&mut self) -> NaiveDate {
        let anchor = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let days_back = self.rng.gen_range(18 * 365..=80 * 365);
        anchor - Duration::days(days_back)
    }

    pub fn bool_with(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability)
    }

    /// Inclusive range.
    pub fn number_between(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }

    /// Pick one element from a slice; `None` when the slice is empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }
}

impl Default for FakeGenerator {
    fn default() -> Self {
        Self::new(Locale::EnGb)
    }
}

impl std::fmt::Debug for FakeGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakeGenerator")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

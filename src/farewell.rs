use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

/// Produces the eulogy shown when a language is lost.
pub trait FarewellTextProvider {
    fn farewell_text(&mut self, label: &str) -> String;
}

const TEMPLATES: [&str; 12] = [
    "Farewell, {}",
    "Adios, {}",
    "R.I.P., {}",
    "We'll miss you, {}",
    "Oh no, not {}!",
    "{} bites the dust",
    "Gone but not forgotten, {}",
    "The end of {} as we know it",
    "Off into the sunset, {}",
    "{}, it's been real",
    "{}, your watch has ended",
    "{} has left the building",
];

/// Picks one of a fixed set of farewell lines at random.
#[derive(Debug, Clone)]
pub struct Farewells {
    rng: StdRng,
}

impl Farewells {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for Farewells {
    fn default() -> Self {
        Self::new()
    }
}

impl FarewellTextProvider for Farewells {
    fn farewell_text(&mut self, label: &str) -> String {
        let template = TEMPLATES.choose(&mut self.rng).copied().unwrap_or(TEMPLATES[0]);
        template.replacen("{}", label, 1)
    }
}

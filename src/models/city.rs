use serde::Serialize;
use std::fmt;

/// Cities with a trip data set, keyed by their lowercase prompt name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

/// City catalog: prompt name → CSV file name.
pub const CITY_DATA: [(&str, &str); 3] = [
    ("chicago", "chicago.csv"),
    ("new york city", "new_york_city.csv"),
    ("washington", "washington.csv"),
];

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    pub fn name(&self) -> &'static str {
        CITY_DATA[self.index()].0
    }

    pub fn file_name(&self) -> &'static str {
        CITY_DATA[self.index()].1
    }

    fn index(&self) -> usize {
        match self {
            City::Chicago => 0,
            City::NewYorkCity => 1,
            City::Washington => 2,
        }
    }

    /// Look up a city by its (already lowercased) prompt name.
    pub fn from_name(name: &str) -> Option<Self> {
        City::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

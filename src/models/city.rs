use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum City {
    Chicago = 0,
    NewYorkCity = 1,
    Washington = 2,
}

/// Static description of one supported dataset.
#[derive(Debug)]
pub struct CityData {
    pub city: City,
    /// Lower-case name accepted at the prompt
    pub key: &'static str,
    pub label: &'static str,
    pub file: &'static str,
    /// Whether the file carries `Gender` and `Birth Year` columns
    pub demographics: bool,
}

/// Fixed city → dataset table, indexed by the `City` discriminant.
pub static CITY_DATA: [CityData; 3] = [
    CityData {
        city: City::Chicago,
        key: "chicago",
        label: "Chicago",
        file: "chicago.csv",
        demographics: true,
    },
    CityData {
        city: City::NewYorkCity,
        key: "new york city",
        label: "New York City",
        file: "new_york_city.csv",
        demographics: true,
    },
    CityData {
        city: City::Washington,
        key: "washington",
        label: "Washington",
        file: "washington.csv",
        demographics: false,
    },
];

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    pub fn data(&self) -> &'static CityData {
        &CITY_DATA[*self as usize]
    }

    pub fn label(&self) -> &'static str {
        self.data().label
    }

    pub fn file_name(&self) -> &'static str {
        self.data().file
    }

    pub fn has_demographics(&self) -> bool {
        self.data().demographics
    }

    /// Helper: convert prompt input (any case) to a city
    pub fn from_input(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        CITY_DATA.iter().find(|d| d.key == s).map(|d| d.city)
    }
}

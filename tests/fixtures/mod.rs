//! Shared test fixtures.
//!
//! Real Las Vegas area coordinates from OpenStreetMap, routable with OSRM
//! Nevada data.

#![allow(dead_code)]

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

/// Strip locations ordered north to south.
pub const STRIP: &[Location] = &[
    Location::new("Encore at Wynn", 36.1289345, -115.1653620),
    Location::new("Wynn Las Vegas", 36.1263781, -115.1658180),
    Location::new("Public House", 36.1219193, -115.1689317),
    Location::new("Caesars Palace", 36.1162, -115.1745),
    Location::new("Bellagio", 36.1126, -115.1767),
    Location::new("Gordon Ramsay BurGR", 36.1107195, -115.1720818),
    Location::new("Hard Rock Cafe", 36.1041592, -115.1722166),
    Location::new("MGM Grand", 36.1023654, -115.1688720),
];

/// Far-off locations that make a round trip expensive if visited out of order.
pub const OUTLYING: &[Location] = &[
    Location::new("Longhorn Casino", 36.1070664, -115.0591256),
    Location::new("Henderson Water Street", 36.0330, -114.9818),
    Location::new("North Las Vegas City Hall", 36.1989, -115.1175),
];

pub fn coords(locations: &[Location]) -> Vec<(f64, f64)> {
    locations.iter().map(Location::coords).collect()
}

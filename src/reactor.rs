//! Observation fields of the reactor agent.

use std::ops::Range;

pub struct Field {
    pub name: &'static str,

    /// Plausible values, used to generate random observations.
    pub range: Range<f64>,
}

pub const FIELDS: [Field; 8] = [
    Field { name: "T", range: 200.0..420.0 },
    Field { name: "Tc", range: 180.0..300.0 },
    Field { name: "Ca", range: 5.0..10.0 },
    Field { name: "Cref", range: 3.0..15.0 },
    Field { name: "Tref", range: 250.0..320.0 },
    Field { name: "Conc_Error", range: 0.0..10.0 },
    Field { name: "Eps_Yield", range: 0.0..50.0 },
    Field { name: "Cb_Prod", range: 0.0..10.0 },
];

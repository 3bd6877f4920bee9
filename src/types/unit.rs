//! Measurement units.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Unit a product is sold or measured in.
///
/// Serialized as its name, e.g. `"Kilogram"`. Names this client does not know
/// are kept verbatim in [`Unit::Other`] and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Unitless value. Also read from `"value"`.
    Value,
    /// Single piece. Also read from `"piece"`.
    Piece,
    /// Milligram.
    Milligram,
    /// Decagram.
    Decagram,
    /// Gram.
    Gram,
    /// Kilogram.
    Kilogram,
    /// Pound.
    Pound,
    /// Ounce.
    Ounce,
    /// Quintal.
    Quintal,
    /// Tonne.
    Tonne,
    /// Millimeter.
    Millimeter,
    /// Centimeter.
    Centimeter,
    /// Meter.
    Meter,
    /// Kilometer.
    Kilometer,
    /// Inch.
    Inch,
    /// Mile.
    Mile,
    /// Square meter.
    SquareMeter,
    /// Square foot.
    SquareFoot,
    /// Milliliter.
    Milliliter,
    /// Deciliter.
    Deciliter,
    /// Centiliter.
    Centiliter,
    /// Liter.
    Liter,
    /// US gallon.
    UsGallon,
    /// UK gallon.
    UkGallon,
    /// Hectoliter.
    Hectoliter,
    /// Cubic meter.
    CubicMeter,
    /// Cubic foot.
    CubicFoot,
    /// Second.
    Second,
    /// Minute.
    Minute,
    /// Hour.
    Hour,
    /// Day.
    Day,
    /// Loyalty points.
    Points,
    /// A unit this client does not know, with its name as received.
    Other(String),
}

const KNOWN_UNITS: &[(Unit, &str)] = &[
    (Unit::Value, "Value"),
    (Unit::Piece, "Piece"),
    (Unit::Milligram, "Milligram"),
    (Unit::Decagram, "Decagram"),
    (Unit::Gram, "Gram"),
    (Unit::Kilogram, "Kilogram"),
    (Unit::Pound, "Pound"),
    (Unit::Ounce, "Ounce"),
    (Unit::Quintal, "Quintal"),
    (Unit::Tonne, "Tonne"),
    (Unit::Millimeter, "Millimeter"),
    (Unit::Centimeter, "Centimeter"),
    (Unit::Meter, "Meter"),
    (Unit::Kilometer, "Kilometer"),
    (Unit::Inch, "Inch"),
    (Unit::Mile, "Mile"),
    (Unit::SquareMeter, "SquareMeter"),
    (Unit::SquareFoot, "SquareFoot"),
    (Unit::Milliliter, "Milliliter"),
    (Unit::Deciliter, "Deciliter"),
    (Unit::Centiliter, "Centiliter"),
    (Unit::Liter, "Liter"),
    (Unit::UsGallon, "UsGallon"),
    (Unit::UkGallon, "UkGallon"),
    (Unit::Hectoliter, "Hectoliter"),
    (Unit::CubicMeter, "CubicMeter"),
    (Unit::CubicFoot, "CubicFoot"),
    (Unit::Second, "Second"),
    (Unit::Minute, "Minute"),
    (Unit::Hour, "Hour"),
    (Unit::Day, "Day"),
    (Unit::Points, "Points"),
];

/// Dimension a unit measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// Pieces.
    Count,
    /// Weight.
    Weight,
    /// Length.
    Length,
    /// Area.
    Area,
    /// Volume.
    Volume,
    /// Time.
    Time,
    /// Points.
    Point,
}

impl Unit {
    /// Parses a unit name. Unknown names become [`Unit::Other`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "value" => return Unit::Value,
            "piece" => return Unit::Piece,
            _ => {}
        }

        KNOWN_UNITS
            .iter()
            .find(|(_, known)| *known == name)
            .map(|(unit, _)| unit.clone())
            .unwrap_or_else(|| Unit::Other(name.to_string()))
    }

    /// Name sent on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            Unit::Other(name) => name.as_str(),
            known => KNOWN_UNITS
                .iter()
                .find(|(unit, _)| unit == known)
                .map(|(_, name)| *name)
                .unwrap_or_default(),
        }
    }

    /// Returns the dimension of this unit. `Value` and unknown units have none.
    pub fn kind(&self) -> Option<UnitKind> {
        use Unit::*;

        match self {
            Value | Other(_) => None,
            Piece => Some(UnitKind::Count),
            Milligram | Decagram | Gram | Kilogram | Pound | Ounce | Quintal | Tonne => {
                Some(UnitKind::Weight)
            }
            Millimeter | Centimeter | Meter | Kilometer | Inch | Mile => Some(UnitKind::Length),
            SquareMeter | SquareFoot => Some(UnitKind::Area),
            Milliliter | Deciliter | Centiliter | Liter | UsGallon | UkGallon | Hectoliter
            | CubicMeter | CubicFoot => Some(UnitKind::Volume),
            Second | Minute | Hour | Day => Some(UnitKind::Time),
            Points => Some(UnitKind::Point),
        }
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Unit::from_name(&name))
    }
}

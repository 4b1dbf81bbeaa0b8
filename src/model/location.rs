//! Where an incident happened or a reservation is requested from.

use crate::model::validation::{is_blank, ValidationError};

text_enum! {
    LocationKind, "location_kind" {
        Apartment => ("apartment", "Apartamento"),
        CommonArea => ("common_area", "Área Comum"),
        Entrance => ("entrance", "Entrada/Portaria"),
        Garage => ("garage", "Garagem"),
        Elevator => ("elevator", "Elevador"),
        Other => ("other", "Outro"),
    }
}

impl LocationKind {
    pub fn requires_unit_number(&self) -> bool {
        matches!(self, LocationKind::Apartment)
    }

    pub fn requires_detail(&self) -> bool {
        matches!(self, LocationKind::CommonArea | LocationKind::Other)
    }
}

/// Checks the qualifier a location kind needs.
///
/// An apartment needs a unit number, a common area or "other" needs a free-text detail, the
/// remaining kinds need nothing. Whitespace-only values count as missing.
pub fn validate_location(
    kind: LocationKind,
    unit_number: Option<&str>,
    location_detail: Option<&str>,
) -> Result<(), ValidationError> {
    if kind.requires_unit_number() && is_blank(unit_number) {
        return Err(ValidationError::MissingUnitNumber);
    }

    if kind.requires_detail() && is_blank(location_detail) {
        return Err(ValidationError::MissingLocationDetail);
    }

    Ok(())
}

/// The single qualifier text kept for a location: the unit for apartments, the detail otherwise.
pub fn resolve_location(
    kind: LocationKind,
    unit_number: Option<&str>,
    location_detail: Option<&str>,
) -> Option<String> {
    let value = if kind.requires_unit_number() {
        unit_number
    } else {
        location_detail
    };

    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

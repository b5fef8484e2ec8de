use crate::facility::errors::FacilityError;

/// A parked vehicle. Both fields are immutable after construction. The color
/// is canonicalized to lower-case on entry so that it can serve as an index
/// key regardless of how the caller spelled it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    registration: String,
    color: String,
}

impl Vehicle {
    /// Validates and canonicalizes the raw input. Empty or whitespace-only
    /// arguments are rejected before any state is touched.
    pub fn new(registration: &str, color: &str) -> Result<Self, FacilityError> {
        let registration = registration.trim();
        if registration.is_empty() {
            return Err(FacilityError::EmptyRegistration);
        }
        let color = canonical_color(color)?;
        Ok(Vehicle {
            registration: registration.to_string(),
            color,
        })
    }

    pub fn registration(&self) -> &str {
        &self.registration
    }

    /// The canonical (lower-case) color used as index key.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Render variant of the color with the first character upper-cased.
    /// Presentation only, the stored color stays canonical.
    pub fn display_color(&self) -> String {
        let mut chars = self.color.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

/// Lower-cases a raw color string, rejecting blank input.
pub fn canonical_color(color: &str) -> Result<String, FacilityError> {
    let color = color.trim();
    if color.is_empty() {
        return Err(FacilityError::EmptyColor);
    }
    Ok(color.to_lowercase())
}

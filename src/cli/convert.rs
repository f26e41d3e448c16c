//! JSON conversion between frame descriptions and selection reports.
//!
//! A frame is described as:
//!
//! ```json
//! {
//!   "names": ["CA", "OW"],
//!   "masses": [12.0, 16.0],
//!   "positions": [[1.0, 0.0, 0.0], [4.0, 0.0, 0.0]],
//!   "velocities": [[0.0, 0.0, 0.0], [0.1, 0.0, 0.0]]
//! }
//! ```
//!
//! where `velocities` is optional.

use serde_json::{Value, json};

use super::CliError;
use crate::frame::{AtomContext, Frame};

fn invalid(message: impl Into<String>) -> CliError {
    CliError::InvalidFrame(message.into())
}

/// Build a [`Frame`] from its JSON description.
pub fn json_to_frame(value: &Value) -> Result<Frame, CliError> {
    let object = value
        .as_object()
        .ok_or_else(|| invalid("frame must be a JSON object"))?;

    let names = object
        .get("names")
        .and_then(Value::as_array)
        .ok_or_else(|| invalid("frame needs a 'names' array"))?;
    let masses = object
        .get("masses")
        .and_then(Value::as_array)
        .ok_or_else(|| invalid("frame needs a 'masses' array"))?;
    let positions = object
        .get("positions")
        .and_then(Value::as_array)
        .ok_or_else(|| invalid("frame needs a 'positions' array"))?;
    if names.len() != masses.len() || names.len() != positions.len() {
        return Err(invalid(
            "'names', 'masses' and 'positions' must have the same length",
        ));
    }

    let mut frame = Frame::new();
    for ((name, mass), position) in names.iter().zip(masses).zip(positions) {
        let name = name
            .as_str()
            .ok_or_else(|| invalid("atom names must be strings"))?;
        let mass = mass
            .as_f64()
            .ok_or_else(|| invalid("masses must be numbers"))?;
        let position = json_to_vector(position, "positions")?;
        frame.add_atom(name, mass, position);
    }

    if let Some(velocities) = object.get("velocities") {
        let velocities = velocities
            .as_array()
            .ok_or_else(|| invalid("'velocities' must be an array"))?;
        if velocities.len() != frame.len() {
            return Err(invalid("'velocities' must have one entry per atom"));
        }
        frame.add_velocities();
        if let Some(slots) = frame.velocities_mut() {
            for (slot, velocity) in slots.iter_mut().zip(velocities) {
                *slot = json_to_vector(velocity, "velocities")?;
            }
        }
    }

    Ok(frame)
}

fn json_to_vector(value: &Value, field: &str) -> Result<[f64; 3], CliError> {
    let components = value
        .as_array()
        .filter(|components| components.len() == 3)
        .ok_or_else(|| invalid(format!("'{}' entries must be [x, y, z] arrays", field)))?;
    let mut out = [0.0; 3];
    for (slot, component) in out.iter_mut().zip(components) {
        *slot = component
            .as_f64()
            .ok_or_else(|| invalid(format!("'{}' components must be numbers", field)))?;
    }
    Ok(out)
}

/// A JSON report of the atoms a selection matched.
pub fn matches_to_json(frame: &Frame, matched: &[usize]) -> Value {
    let names: Vec<String> = matched
        .iter()
        .filter_map(|&index| frame.atom(index).map(|atom| atom.name().to_string()))
        .collect();
    json!({
        "count": matched.len(),
        "indices": matched,
        "names": names,
    })
}

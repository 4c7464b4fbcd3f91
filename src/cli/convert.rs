//! JSON <-> frame conversion utilities
//!
//! Frames are read from objects shaped like
//!
//! ```text
//! {"atoms": [
//!     {"name": "OW", "type": "O", "mass": 15.999,
//!      "residue": {"name": "WAT", "id": 1},
//!      "position": [0.0, 0.0, 0.0], "velocity": [0.1, 0.0, 0.0]}
//! ]}
//! ```
//!
//! Only `name` is required. Either every atom has a `velocity` or none does.

use serde_json::{Map, Value};

use super::CliError;
use crate::{Atom, Frame, Residue, Vector3D};

fn invalid(msg: impl Into<String>) -> CliError {
    CliError::InvalidFrame(msg.into())
}

fn vector(value: &Value, field: &str, index: usize) -> Result<Vector3D, CliError> {
    let components = value
        .as_array()
        .filter(|components| components.len() == 3)
        .ok_or_else(|| invalid(format!("atom {}: '{}' must be an array of 3 numbers", index, field)))?;

    let mut result = [0.0; 3];
    for (slot, component) in result.iter_mut().zip(components) {
        *slot = component.as_f64().ok_or_else(|| {
            invalid(format!("atom {}: '{}' must be an array of 3 numbers", index, field))
        })?;
    }
    Ok(result)
}

fn residue(value: &Value, index: usize) -> Result<Residue, CliError> {
    let name = value.get("name").and_then(Value::as_str);
    let id = value.get("id").and_then(Value::as_u64);
    match (name, id) {
        (Some(name), Some(id)) => Ok(Residue::new(name, id)),
        _ => Err(invalid(format!(
            "atom {}: 'residue' needs a string 'name' and a non-negative integer 'id'",
            index
        ))),
    }
}

fn atom(object: &Map<String, Value>, index: usize) -> Result<Atom, CliError> {
    let name = object
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| invalid(format!("atom {}: missing string 'name'", index)))?;
    let mut atom = Atom::new(name);

    if let Some(value) = object.get("type") {
        let atom_type = value
            .as_str()
            .ok_or_else(|| invalid(format!("atom {}: 'type' must be a string", index)))?;
        atom = atom.with_type(atom_type);
    }
    if let Some(value) = object.get("mass") {
        let mass = value
            .as_f64()
            .ok_or_else(|| invalid(format!("atom {}: 'mass' must be a number", index)))?;
        atom = atom.with_mass(mass);
    }
    if let Some(value) = object.get("residue") {
        atom = atom.with_residue(residue(value, index)?);
    }
    Ok(atom)
}

/// Convert a JSON frame to a [`Frame`]
pub fn json_to_frame(v: Value) -> Result<Frame, CliError> {
    let atoms = v
        .get("atoms")
        .and_then(Value::as_array)
        .ok_or_else(|| invalid("expected an object with an 'atoms' array"))?;

    let with_velocities = atoms.first().is_some_and(|a| a.get("velocity").is_some());

    let mut frame = Frame::new();
    if with_velocities {
        frame.add_velocities();
    }

    for (index, value) in atoms.iter().enumerate() {
        let object = value
            .as_object()
            .ok_or_else(|| invalid(format!("atom {}: expected an object", index)))?;

        let position = match object.get("position") {
            Some(position) => vector(position, "position", index)?,
            None => [0.0; 3],
        };

        let atom = atom(object, index)?;
        match (object.get("velocity"), with_velocities) {
            (Some(velocity), true) => {
                let velocity = vector(velocity, "velocity", index)?;
                frame.add_atom_with_velocity(atom, position, velocity);
            }
            (None, false) => frame.add_atom(atom, position),
            _ => {
                return Err(invalid(format!(
                    "atom {}: either every atom or no atom must have a 'velocity'",
                    index
                )));
            }
        }
    }
    Ok(frame)
}

/// Convert matching indices to a JSON array
pub fn indices_to_json(indices: &[usize]) -> Value {
    Value::Array(indices.iter().map(|&i| Value::from(i)).collect())
}

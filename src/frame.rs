//! Simulation frames as seen by the selection evaluator.
//!
//! The evaluator only reads atoms through the [`Snapshot`] trait, so any
//! container holding one simulation step can be queried. [`Frame`] is the
//! in-crate implementation: a list of atoms with their positions, and
//! optionally their velocities.

/// Three-component vector, in angstrom for positions.
pub type Vector3D = [f64; 3];

/// Read-only view of one simulation step.
///
/// `size`, `name` and `position` are always available. Everything else is
/// optional per atom: an atom returning `None` does not match selections on
/// that property. When no atom provides it, those selections fail with
/// [`EvalError::MissingData`](crate::EvalError::MissingData) instead of
/// silently matching nothing.
///
/// Indices passed to the accessors are always below `size()`.
pub trait Snapshot {
    /// Number of atoms
    fn size(&self) -> usize;

    fn name(&self, index: usize) -> &str;

    fn position(&self, index: usize) -> Vector3D;

    /// Velocity of the atom, `None` when the step carries no velocities
    fn velocity(&self, index: usize) -> Option<Vector3D>;

    fn atom_type(&self, _index: usize) -> Option<&str> {
        None
    }

    fn mass(&self, _index: usize) -> Option<f64> {
        None
    }

    /// Name of the residue containing the atom
    fn residue_name(&self, _index: usize) -> Option<&str> {
        None
    }

    /// Identifier of the residue containing the atom
    fn residue_id(&self, _index: usize) -> Option<u64> {
        None
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Residue {
    pub name: String,
    pub id: u64,
}

impl Residue {
    pub fn new(name: impl Into<String>, id: u64) -> Self {
        Residue {
            name: name.into(),
            id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub name: String,
    pub atom_type: Option<String>,
    pub mass: Option<f64>,
    pub residue: Option<Residue>,
}

impl Atom {
    pub fn new(name: impl Into<String>) -> Self {
        Atom {
            name: name.into(),
            atom_type: None,
            mass: None,
            residue: None,
        }
    }

    pub fn with_type(mut self, atom_type: impl Into<String>) -> Self {
        self.atom_type = Some(atom_type.into());
        self
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = Some(mass);
        self
    }

    pub fn with_residue(mut self, residue: Residue) -> Self {
        self.residue = Some(residue);
        self
    }
}

/// Atoms of one simulation step with their positions and optional
/// velocities.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    atoms: Vec<Atom>,
    positions: Vec<Vector3D>,
    velocities: Option<Vec<Vector3D>>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an atom. If the frame carries velocities, the new atom's
    /// velocity is zero.
    pub fn add_atom(&mut self, atom: Atom, position: Vector3D) {
        self.atoms.push(atom);
        self.positions.push(position);
        if let Some(velocities) = &mut self.velocities {
            velocities.push([0.0; 3]);
        }
    }

    /// Appends an atom with its velocity, adding velocity storage to the
    /// frame first if needed.
    pub fn add_atom_with_velocity(&mut self, atom: Atom, position: Vector3D, velocity: Vector3D) {
        self.add_velocities();
        self.atoms.push(atom);
        self.positions.push(position);
        if let Some(velocities) = &mut self.velocities {
            velocities.push(velocity);
        }
    }

    /// Adds velocity storage, initialized to zero. Does nothing if the frame
    /// already has velocities.
    pub fn add_velocities(&mut self) {
        if self.velocities.is_none() {
            self.velocities = Some(vec![[0.0; 3]; self.atoms.len()]);
        }
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn positions(&self) -> &[Vector3D] {
        &self.positions
    }

    pub fn positions_mut(&mut self) -> &mut [Vector3D] {
        &mut self.positions
    }

    pub fn velocities(&self) -> Option<&[Vector3D]> {
        self.velocities.as_deref()
    }

    pub fn velocities_mut(&mut self) -> Option<&mut [Vector3D]> {
        self.velocities.as_deref_mut()
    }
}

impl Snapshot for Frame {
    fn size(&self) -> usize {
        self.atoms.len()
    }

    fn name(&self, index: usize) -> &str {
        &self.atoms[index].name
    }

    fn position(&self, index: usize) -> Vector3D {
        self.positions[index]
    }

    fn velocity(&self, index: usize) -> Option<Vector3D> {
        self.velocities.as_ref().map(|velocities| velocities[index])
    }

    fn atom_type(&self, index: usize) -> Option<&str> {
        self.atoms[index].atom_type.as_deref()
    }

    fn mass(&self, index: usize) -> Option<f64> {
        self.atoms[index].mass
    }

    fn residue_name(&self, index: usize) -> Option<&str> {
        self.atoms[index].residue.as_ref().map(|r| r.name.as_str())
    }

    fn residue_id(&self, index: usize) -> Option<u64> {
        self.atoms[index].residue.as_ref().map(|r| r.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocities_are_optional() {
        let mut frame = Frame::new();
        frame.add_atom(Atom::new("O"), [1.0, 2.0, 3.0]);
        assert_eq!(frame.velocity(0), None);

        frame.add_velocities();
        assert_eq!(frame.velocity(0), Some([0.0; 3]));

        frame.add_atom(Atom::new("H"), [0.0; 3]);
        assert_eq!(frame.velocities().map(|v| v.len()), Some(2));
    }

    #[test]
    fn test_add_atom_with_velocity_backfills() {
        let mut frame = Frame::new();
        frame.add_atom(Atom::new("O"), [0.0; 3]);
        frame.add_atom_with_velocity(Atom::new("H"), [0.0; 3], [1.0, -1.0, 0.5]);

        assert_eq!(frame.velocity(0), Some([0.0; 3]));
        assert_eq!(frame.velocity(1), Some([1.0, -1.0, 0.5]));
    }

    #[test]
    fn test_optional_properties() {
        let mut frame = Frame::new();
        frame.add_atom(
            Atom::new("OW")
                .with_type("O")
                .with_mass(15.999)
                .with_residue(Residue::new("WAT", 7)),
            [0.0; 3],
        );
        frame.add_atom(Atom::new("X"), [0.0; 3]);

        assert_eq!(frame.atom_type(0), Some("O"));
        assert_eq!(frame.mass(0), Some(15.999));
        assert_eq!(frame.residue_name(0), Some("WAT"));
        assert_eq!(frame.residue_id(0), Some(7));
        assert_eq!(frame.atom_type(1), None);
        assert_eq!(frame.residue_id(1), None);
    }
}

//! Atom and frame data the selection engine evaluates against.
//!
//! The engine itself never owns trajectory data; it only reads per-atom
//! attributes through the [`AtomContext`] accessor contract. [`Frame`] is a
//! minimal owned container implementing that contract, enough for tests,
//! the CLI, and callers without their own frame type.

/// Per-atom capability set consumed by selection evaluation.
///
/// Implement this on whatever atom handle your frame layer exposes; the
/// evaluator only ever reads through it.
pub trait AtomContext {
    /// Atom name, e.g. `"CA"` or `"OW"`.
    fn name(&self) -> &str;

    /// Atomic mass.
    fn mass(&self) -> f64;

    /// Index of the atom in its frame.
    fn index(&self) -> usize;

    /// Position vector.
    fn position(&self) -> [f64; 3];

    /// Velocity vector, if the frame carries velocities.
    fn velocity(&self) -> Option<[f64; 3]>;
}

/// An owned frame: one name, mass and position per atom, with optional
/// velocities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    names: Vec<String>,
    masses: Vec<f64>,
    positions: Vec<[f64; 3]>,
    velocities: Option<Vec<[f64; 3]>>,
}

impl Frame {
    /// Creates an empty frame.
    pub fn new() -> Self {
        Frame::default()
    }

    /// Appends one atom. If the frame carries velocities, the new atom
    /// starts with a zero velocity.
    pub fn add_atom(&mut self, name: impl Into<String>, mass: f64, position: [f64; 3]) {
        self.names.push(name.into());
        self.masses.push(mass);
        self.positions.push(position);
        if let Some(velocities) = &mut self.velocities {
            velocities.push([0.0; 3]);
        }
    }

    /// Enables velocity storage; existing atoms get zero velocities.
    /// Does nothing if velocities are already enabled.
    pub fn add_velocities(&mut self) {
        if self.velocities.is_none() {
            self.velocities = Some(vec![[0.0; 3]; self.names.len()]);
        }
    }

    /// The velocities, one per atom, if enabled.
    pub fn velocities(&self) -> Option<&[[f64; 3]]> {
        self.velocities.as_deref()
    }

    /// Mutable access to the velocities, if enabled.
    pub fn velocities_mut(&mut self) -> Option<&mut [[f64; 3]]> {
        self.velocities.as_deref_mut()
    }

    /// Number of atoms in the frame.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the frame contains no atoms.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// A handle on the atom at `index`, or `None` out of bounds.
    pub fn atom(&self, index: usize) -> Option<AtomRef<'_>> {
        if index < self.names.len() {
            Some(AtomRef { frame: self, index })
        } else {
            None
        }
    }

    /// Iterator over all atoms of the frame.
    pub fn atoms(&self) -> impl Iterator<Item = AtomRef<'_>> {
        (0..self.names.len()).map(|index| AtomRef { frame: self, index })
    }
}

/// A borrowed view of one atom of a [`Frame`].
#[derive(Debug, Clone, Copy)]
pub struct AtomRef<'a> {
    frame: &'a Frame,
    index: usize,
}

impl AtomContext for AtomRef<'_> {
    fn name(&self) -> &str {
        &self.frame.names[self.index]
    }

    fn mass(&self) -> f64 {
        self.frame.masses[self.index]
    }

    fn index(&self) -> usize {
        self.index
    }

    fn position(&self) -> [f64; 3] {
        self.frame.positions[self.index]
    }

    fn velocity(&self) -> Option<[f64; 3]> {
        self.frame
            .velocities
            .as_ref()
            .map(|velocities| velocities[self.index])
    }
}

#[test]
fn test_frame_atoms() {
    let mut frame = Frame::new();
    frame.add_atom("CA", 12.0, [1.0, 2.0, 3.0]);
    frame.add_atom("OW", 16.0, [0.0, 0.0, 0.0]);

    assert_eq!(frame.len(), 2);
    let atom = frame.atom(0).unwrap();
    assert_eq!(atom.name(), "CA");
    assert_eq!(atom.position(), [1.0, 2.0, 3.0]);
    assert_eq!(atom.velocity(), None);
    assert!(frame.atom(2).is_none());
}

#[test]
fn test_frame_velocities() {
    let mut frame = Frame::new();
    frame.add_atom("CA", 12.0, [0.0; 3]);
    frame.add_velocities();
    frame.add_atom("CB", 12.0, [0.0; 3]);

    // Both atoms have a velocity slot, pre- and post-enable.
    assert_eq!(frame.velocities().map(<[_]>::len), Some(2));
    if let Some(velocities) = frame.velocities_mut() {
        velocities[1] = [1.0, 0.0, 0.0];
    }
    assert_eq!(frame.atom(1).unwrap().velocity(), Some([1.0, 0.0, 0.0]));
}

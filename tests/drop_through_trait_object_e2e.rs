use fieldsource::{FieldSource, FieldVector, Scaled, SharedFieldSource, Superposition};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Owns a resource whose release is observable.
struct Owning {
    table: Vec<f64>,
    released: Arc<AtomicUsize>,
}

impl Owning {
    fn new(released: &Arc<AtomicUsize>) -> Self {
        Self {
            table: vec![1.0, 2.0, 3.0],
            released: Arc::clone(released),
        }
    }
}

impl Drop for Owning {
    fn drop(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

impl FieldSource for Owning {
    fn electric_field(&self, _x: f64, _y: f64, _z: f64, _t: f64) -> FieldVector {
        FieldVector::new(self.table[0], self.table[1], self.table[2])
    }
}

#[test]
fn boxed_trait_object_runs_implementor_drop() {
    let released = Arc::new(AtomicUsize::new(0));
    let src: Box<dyn FieldSource> = Box::new(Owning::new(&released));
    assert_eq!(src.electric_field(0.0, 0.0, 0.0, 0.0), FieldVector::new(1.0, 2.0, 3.0));
    assert_eq!(released.load(Ordering::SeqCst), 0);
    drop(src);
    assert_eq!(released.load(Ordering::SeqCst), 1);
}

#[test]
fn shared_handle_drops_once_on_last_reference() {
    let released = Arc::new(AtomicUsize::new(0));
    let a: SharedFieldSource = Arc::new(Owning::new(&released));
    let b = Arc::clone(&a);
    drop(a);
    assert_eq!(released.load(Ordering::SeqCst), 0);
    drop(b);
    assert_eq!(released.load(Ordering::SeqCst), 1);
}

#[test]
fn composites_release_their_parts() {
    let released = Arc::new(AtomicUsize::new(0));
    let sup = Superposition::new()
        .with(Owning::new(&released))
        .with(Scaled::uniform(Owning::new(&released), 2.0));
    assert_eq!(sup.electric_field(0.0, 0.0, 0.0, 0.0), FieldVector::new(3.0, 6.0, 9.0));
    let erased: Box<dyn FieldSource> = Box::new(sup);
    drop(erased);
    assert_eq!(released.load(Ordering::SeqCst), 2);
}

/// A caller supplied function applied to one half of a sample.
pub struct Transform<T>(Box<dyn Fn(T) -> T + Send + Sync>);

impl<T> Transform<T> {
    pub fn new<F: Fn(T) -> T + Send + Sync + 'static>(f: F) -> Self {
        Self(Box::new(f))
    }

    pub fn call(&self, value: T) -> T {
        (self.0)(value)
    }
}

impl<T> std::fmt::Debug for Transform<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Transform(..)")
    }
}

pub(crate) fn apply<T>(transform: Option<&Transform<T>>, value: T) -> T {
    match transform {
        Some(t) => t.call(value),
        None => value,
    }
}

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Shape-preserving sample containers.
//!
//! Conversions accept a lone scalar or any (possibly nested) sequence of
//! scalars and return a container of the same shape. Each element is mapped
//! on its own; nothing is decided from the collection as a whole.

pub trait Samples {
    /// `Self` with every scalar replaced by a `T`.
    type Output<T>;

    /// True for a lone scalar, which in-place operations reject.
    const IS_SCALAR: bool = false;

    fn map_samples<T, F: FnMut(f64) -> T>(&self, f: &mut F) -> Self::Output<T>;

    fn for_each_sample_mut<F: FnMut(&mut f64)>(&mut self, f: &mut F);

    fn sample_count(&self) -> usize;
}

impl Samples for f64 {
    type Output<T> = T;
    const IS_SCALAR: bool = true;

    fn map_samples<T, F: FnMut(f64) -> T>(&self, f: &mut F) -> Self::Output<T> {
        f(*self)
    }

    fn for_each_sample_mut<F: FnMut(&mut f64)>(&mut self, f: &mut F) {
        f(self)
    }

    fn sample_count(&self) -> usize {
        1
    }
}

impl Samples for f32 {
    type Output<T> = T;
    const IS_SCALAR: bool = true;

    fn map_samples<T, F: FnMut(f64) -> T>(&self, f: &mut F) -> Self::Output<T> {
        f(*self as f64)
    }

    fn for_each_sample_mut<F: FnMut(&mut f64)>(&mut self, f: &mut F) {
        let mut wide = *self as f64;
        f(&mut wide);
        *self = wide as f32;
    }

    fn sample_count(&self) -> usize {
        1
    }
}

impl<S: Samples> Samples for [S] {
    type Output<T> = Vec<S::Output<T>>;

    fn map_samples<T, F: FnMut(f64) -> T>(&self, f: &mut F) -> Self::Output<T> {
        let mut out = Vec::with_capacity(self.len());
        for s in self {
            out.push(s.map_samples(&mut *f));
        }
        out
    }

    fn for_each_sample_mut<F: FnMut(&mut f64)>(&mut self, f: &mut F) {
        for s in self.iter_mut() {
            s.for_each_sample_mut(&mut *f);
        }
    }

    fn sample_count(&self) -> usize {
        self.iter().map(|s| s.sample_count()).sum()
    }
}

impl<S: Samples> Samples for Vec<S> {
    type Output<T> = Vec<S::Output<T>>;

    fn map_samples<T, F: FnMut(f64) -> T>(&self, f: &mut F) -> Self::Output<T> {
        self.as_slice().map_samples(f)
    }

    fn for_each_sample_mut<F: FnMut(&mut f64)>(&mut self, f: &mut F) {
        self.as_mut_slice().for_each_sample_mut(f)
    }

    fn sample_count(&self) -> usize {
        self.as_slice().sample_count()
    }
}

impl<S: Samples, const N: usize> Samples for [S; N] {
    type Output<T> = [S::Output<T>; N];

    fn map_samples<T, F: FnMut(f64) -> T>(&self, f: &mut F) -> Self::Output<T> {
        core::array::from_fn(|i| self[i].map_samples(&mut *f))
    }

    fn for_each_sample_mut<F: FnMut(&mut f64)>(&mut self, f: &mut F) {
        self.as_mut_slice().for_each_sample_mut(f)
    }

    fn sample_count(&self) -> usize {
        self.as_slice().sample_count()
    }
}

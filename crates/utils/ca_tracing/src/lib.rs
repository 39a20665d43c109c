//! Profiling scopes for output recomputation.
//!
//! Every output slot is recomputed on each snapshot change, so the composer and
//! table assembler are instrumented with puffin scopes. Scopes are free when
//! puffin's profiler is not enabled.

pub mod reexports {
    #[cfg(not(target_arch = "wasm32"))]
    pub use puffin;
}

/// Profile the enclosing function with puffin on native, no-op on wasm.
#[macro_export]
macro_rules! profile_function {
    ($($arg: tt)*) => {
        #[cfg(not(target_arch = "wasm32"))]
        $crate::reexports::puffin::profile_function!($($arg)*);
    };
}

/// Profile the enclosing scope with puffin on native, no-op on wasm.
#[macro_export]
macro_rules! profile_scope {
    ($($arg: tt)*) => {
        #[cfg(not(target_arch = "wasm32"))]
        $crate::reexports::puffin::profile_scope!($($arg)*);
    };
}


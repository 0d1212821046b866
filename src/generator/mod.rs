//! Random-byte generators and the capability contract they satisfy
//!
//! A generator is a stateless source of random bytes. Beyond producing
//! bytes, every generator answers two questions without being instantiated:
//! whether it works on the current platform, and how strongly it should be
//! preferred when several generators are available. The answers drive the
//! selection policy in [`crate::selector`].

mod secure;
mod urandom;

pub use secure::SecureGenerator;
pub use urandom::UrandomGenerator;

/// Preference rank of a generator, compared when several are supported.
///
/// The numeric values are fixed per implementation and only ever compared;
/// nothing owns or mutates a priority at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Low = 1,
    Medium = 2,
    High = 3,
}

/// Contract every random-byte source must satisfy.
///
/// `generate` must return exactly `byte_count` bytes and must not panic or
/// error on an unsupported platform; unsupported generators are expected to
/// be filtered out via [`Generator::is_supported`] before `generate` is
/// called, and degrade to zero-padded output if they are not.
pub trait Generator {
    /// Produces `byte_count` random bytes.
    ///
    /// If the underlying source is unavailable or fails, the result is
    /// right-padded with zero bytes to the requested length rather than an
    /// error. An all-zero result therefore carries no entropy guarantee.
    fn generate(&self, byte_count: usize) -> Vec<u8>;

    /// Pure, side-effect-free check for platform support.
    ///
    /// Deterministic for a fixed platform: repeated calls return the same
    /// answer.
    fn is_supported() -> bool
    where
        Self: Sized;

    /// Fixed preference rank of this generator.
    fn priority() -> Priority
    where
        Self: Sized;
}

/// Stateless capability descriptor for one generator.
///
/// Carries the capability queries as function pointers so a selector can
/// rank every known generator without constructing any of them, and only
/// instantiate the winner.
pub struct Descriptor {
    pub name: &'static str,
    pub supported: fn() -> bool,
    pub priority: fn() -> Priority,
    pub instantiate: fn() -> Box<dyn Generator>,
}

impl Descriptor {
    /// Builds the descriptor for a generator type.
    pub fn of<G: Generator + Default + 'static>(name: &'static str) -> Self {
        Self {
            name,
            supported: G::is_supported,
            priority: G::priority,
            instantiate: || Box::new(G::default()),
        }
    }
}

/// Right-pads `bytes` with zeros until it is exactly `byte_count` long.
///
/// Shared degrade path for all generators: an empty or short buffer becomes
/// a full-length, partially (or fully) zeroed one.
pub(crate) fn zero_pad(mut bytes: Vec<u8>, byte_count: usize) -> Vec<u8> {
    bytes.resize(byte_count, 0);
    bytes
}

use std::fmt::Debug;

use rand_core::{impls, Error, RngCore};

use crate::seed::splitmix64;

/// Common contract shared by every generator in the xoshiro/xoroshiro family.
///
/// Each implementor owns a fixed-size array of state words, mutated in place
/// by [`Engine::next`]. Which concrete generator to use is a compile-time
/// choice; there is no runtime dispatch between variants.
///
/// The `Default` engine carries the all-zero state. It exists only so a
/// caller can deserialize into it with [`Engine::set_state`]; stepping it
/// before that is a caller error, not a fault. The all-zero state is a fixed
/// point for every variant: it maps to itself and emits zero forever. The
/// seeded constructors make reaching it from any seed astronomically
/// unlikely, but [`Engine::set_state`] will accept it.
pub trait Engine: Default {
    /// The word type emitted by [`Engine::next`].
    type Word;

    /// Snapshot of the full internal state, as an array of state words.
    ///
    /// This is the only persisted/transferable representation of a generator.
    /// There is no version tag, so whoever restores a state must already know
    /// which variant produced it.
    type State: Copy + Eq + Debug;

    /// Expands `seed` into a full state via [`splitmix64`].
    fn from_seed(seed: u64) -> Self;

    /// Expands two independent seeds into a full state via [`splitmix64`].
    fn from_seed_pair(seed1: u64, seed2: u64) -> Self;

    /// Restores a previously captured state exactly. No warm-up is performed,
    /// so the new generator resumes where the originating one left off.
    fn from_state(state: Self::State) -> Self;

    /// Returns a snapshot copy of the internal state.
    fn state(&self) -> Self::State;

    /// Replaces the internal state wholesale.
    fn set_state(&mut self, state: Self::State);

    /// Advances the generator one step and returns one output word.
    fn next(&mut self) -> Self::Word;

    /// Smallest value this generator can emit.
    fn min() -> Self::Word;

    /// Largest value this generator can emit.
    fn max() -> Self::Word;
}

/// Generates one member of the generator family.
///
/// The constructors, state accessors, [`Engine`] impl, and [`RngCore`] impl
/// are identical across variants; only the transition body differs, so each
/// invocation supplies its own.
macro_rules! engine {
    ($(#[$meta:meta])* $name:ident, $word:tt, $words:literal, |$s:ident| $next:block) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            s: [$word; $words],
        }

        impl $name {
            /// Creates a generator by expanding `seed` with [`splitmix64`],
            /// one call per state word, each output feeding the next input.
            ///
            /// The first output after expansion is discarded, to decorrelate
            /// the low-order seed bits before the first consumable word.
            /// Identical seeds produce identical output sequences.
            pub fn new(mut seed: u64) -> Self {
                let mut s = [0; $words];
                for word in s.iter_mut() {
                    seed = splitmix64(seed);
                    *word = seed as $word;
                }

                let mut engine = Self { s };
                engine.next();
                engine
            }

            /// Like [`Self::new`], but interleaves the expansions of two
            /// independent seeds into alternating state slots. Same warm-up.
            pub fn with_seed_pair(mut seed1: u64, mut seed2: u64) -> Self {
                let mut s = [0; $words];
                for pair in s.chunks_exact_mut(2) {
                    seed1 = splitmix64(seed1);
                    seed2 = splitmix64(seed2);
                    pair[0] = seed1 as $word;
                    pair[1] = seed2 as $word;
                }

                let mut engine = Self { s };
                engine.next();
                engine
            }

            /// Restores a captured state exactly; no expansion, no warm-up.
            pub const fn from_state(state: [$word; $words]) -> Self {
                Self { s: state }
            }

            /// Returns a snapshot copy of the internal state.
            pub const fn state(&self) -> [$word; $words] {
                self.s
            }

            /// Replaces the internal state wholesale. The generator continues
            /// from `state` on the next call.
            pub fn set_state(&mut self, state: [$word; $words]) {
                self.s = state;
            }

            /// Smallest value this generator can emit.
            pub const fn min() -> $word {
                <$word>::MIN
            }

            /// Largest value this generator can emit.
            pub const fn max() -> $word {
                <$word>::MAX
            }

            /// Advances the state one step and returns one output word.
            #[inline]
            pub fn next(&mut self) -> $word {
                let $s = &mut self.s;
                $next
            }
        }

        impl Engine for $name {
            type Word = $word;
            type State = [$word; $words];

            fn from_seed(seed: u64) -> Self {
                Self::new(seed)
            }

            fn from_seed_pair(seed1: u64, seed2: u64) -> Self {
                Self::with_seed_pair(seed1, seed2)
            }

            fn from_state(state: Self::State) -> Self {
                Self::from_state(state)
            }

            fn state(&self) -> Self::State {
                self.state()
            }

            fn set_state(&mut self, state: Self::State) {
                self.set_state(state);
            }

            fn next(&mut self) -> Self::Word {
                self.next()
            }

            fn min() -> Self::Word {
                Self::min()
            }

            fn max() -> Self::Word {
                Self::max()
            }
        }

        rng_core_impl!($name, $word);
    };
}

/// [`RngCore`] plumbing so any generator works with [`rand`]'s distributions.
///
/// 64-bit generators emit `u32`s from the high half of one word; 32-bit
/// generators compose `u64`s from two words via [`rand_core::impls`].
macro_rules! rng_core_impl {
    ($name:ident, u64) => {
        impl RngCore for $name {
            #[inline]
            fn next_u32(&mut self) -> u32 {
                (self.next() >> 32) as u32
            }

            #[inline]
            fn next_u64(&mut self) -> u64 {
                self.next()
            }

            #[inline]
            fn fill_bytes(&mut self, dest: &mut [u8]) {
                impls::fill_bytes_via_next(self, dest)
            }

            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
                self.fill_bytes(dest);
                Ok(())
            }
        }
    };
    ($name:ident, u32) => {
        impl RngCore for $name {
            #[inline]
            fn next_u32(&mut self) -> u32 {
                self.next()
            }

            #[inline]
            fn next_u64(&mut self) -> u64 {
                impls::next_u64_via_u32(self)
            }

            #[inline]
            fn fill_bytes(&mut self, dest: &mut [u8]) {
                impls::fill_bytes_via_next(self, dest)
            }

            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
                self.fill_bytes(dest);
                Ok(())
            }
        }
    };
}

engine!(
    /// xoshiro256++: 256 bits of state, 64-bit output, rotate-add scrambler.
    ///
    /// An all-purpose generator; the default choice in this crate's tools.
    ///
    /// Source: <https://prng.di.unimi.it/xoshiro256plusplus.c>
    Xoshiro256PlusPlus, u64, 4, |s| {
        let result = s[0].wrapping_add(s[3]).rotate_left(23).wrapping_add(s[0]);

        let t = s[1] << 17;

        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];

        s[2] ^= t;

        s[3] = s[3].rotate_left(45);

        result
    }
);

engine!(
    /// xoshiro256**: 256 bits of state, 64-bit output, multiply-rotate-multiply
    /// scrambler.
    ///
    /// Source: <https://prng.di.unimi.it/xoshiro256starstar.c>
    Xoshiro256StarStar, u64, 4, |s| {
        let result = s[1].wrapping_mul(5).rotate_left(7).wrapping_mul(9);

        let t = s[1] << 17;

        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];

        s[2] ^= t;

        s[3] = s[3].rotate_left(45);

        result
    }
);

engine!(
    /// xoshiro256+: 256 bits of state, 64-bit output, plain-sum scrambler.
    ///
    /// The fastest 4-word variant. Its lowest bits have low linear complexity,
    /// so prefer it for float generation from the high bits.
    ///
    /// Source: <https://prng.di.unimi.it/xoshiro256plus.c>
    Xoshiro256Plus, u64, 4, |s| {
        let result = s[0].wrapping_add(s[3]);

        let t = s[1] << 17;

        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];

        s[2] ^= t;

        s[3] = s[3].rotate_left(45);

        result
    }
);

engine!(
    /// xoroshiro128++: 128 bits of state, 64-bit output, rotate-add scrambler.
    ///
    /// Source: <https://prng.di.unimi.it/xoroshiro128plusplus.c>
    Xoroshiro128PlusPlus, u64, 2, |s| {
        let s0 = s[0];
        let mut s1 = s[1];
        let result = s0.wrapping_add(s1).rotate_left(17).wrapping_add(s0);

        s1 ^= s0;
        s[0] = s0.rotate_left(49) ^ s1 ^ (s1 << 21);
        s[1] = s1.rotate_left(28);

        result
    }
);

engine!(
    /// xoroshiro128**: 128 bits of state, 64-bit output, multiply-rotate-multiply
    /// scrambler.
    ///
    /// Source: <https://prng.di.unimi.it/xoroshiro128starstar.c>
    Xoroshiro128StarStar, u64, 2, |s| {
        let s0 = s[0];
        let mut s1 = s[1];
        let result = s0.wrapping_mul(5).rotate_left(7).wrapping_mul(9);

        s1 ^= s0;
        s[0] = s0.rotate_left(24) ^ s1 ^ (s1 << 16);
        s[1] = s1.rotate_left(37);

        result
    }
);

engine!(
    /// xoroshiro128+: 128 bits of state, 64-bit output, plain-sum scrambler.
    ///
    /// Source: <https://prng.di.unimi.it/xoroshiro128plus.c>
    Xoroshiro128Plus, u64, 2, |s| {
        let s0 = s[0];
        let mut s1 = s[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        s[0] = s0.rotate_left(24) ^ s1 ^ (s1 << 16);
        s[1] = s1.rotate_left(37);

        result
    }
);

engine!(
    /// xoshiro128++: 128 bits of state, 32-bit output, rotate-add scrambler.
    ///
    /// Source: <https://prng.di.unimi.it/xoshiro128plusplus.c>
    Xoshiro128PlusPlus, u32, 4, |s| {
        let result = s[0].wrapping_add(s[3]).rotate_left(7).wrapping_add(s[0]);

        let t = s[1] << 9;

        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];

        s[2] ^= t;

        s[3] = s[3].rotate_left(11);

        result
    }
);

engine!(
    /// xoshiro128**: 128 bits of state, 32-bit output, multiply-rotate-multiply
    /// scrambler.
    ///
    /// Source: <https://prng.di.unimi.it/xoshiro128starstar.c>
    Xoshiro128StarStar, u32, 4, |s| {
        let result = s[1].wrapping_mul(5).rotate_left(7).wrapping_mul(9);

        let t = s[1] << 9;

        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];

        s[2] ^= t;

        s[3] = s[3].rotate_left(11);

        result
    }
);

engine!(
    /// xoshiro128+: 128 bits of state, 32-bit output, plain-sum scrambler.
    ///
    /// Source: <https://prng.di.unimi.it/xoshiro128plus.c>
    Xoshiro128Plus, u32, 4, |s| {
        let result = s[0].wrapping_add(s[3]);

        let t = s[1] << 9;

        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];

        s[2] ^= t;

        s[3] = s[3].rotate_left(11);

        result
    }
);

engine!(
    /// xoroshiro64**: 64 bits of state, 32-bit output, multiply-rotate-multiply
    /// scrambler.
    ///
    /// Source: <https://prng.di.unimi.it/xoroshiro64starstar.c>
    Xoroshiro64StarStar, u32, 2, |s| {
        let s0 = s[0];
        let mut s1 = s[1];
        let result = s0.wrapping_mul(0x9E3779BB).rotate_left(5).wrapping_mul(5);

        s1 ^= s0;
        s[0] = s0.rotate_left(26) ^ s1 ^ (s1 << 9);
        s[1] = s1.rotate_left(13);

        result
    }
);

engine!(
    /// xoroshiro64*: 64 bits of state, 32-bit output, single-multiply scrambler.
    ///
    /// Source: <https://prng.di.unimi.it/xoroshiro64star.c>
    Xoroshiro64Star, u32, 2, |s| {
        let s0 = s[0];
        let mut s1 = s[1];
        let result = s0.wrapping_mul(0x9E3779BB);

        s1 ^= s0;
        s[0] = s0.rotate_left(26) ^ s1 ^ (s1 << 9);
        s[1] = s1.rotate_left(13);

        result
    }
);

/// Defines a fieldless, ordered enum of named divisions and generates:
/// - derives (Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)
/// - an `$all` table of every variant in order
/// - `name()`, `index()` and `from_index()`
///
/// Usage:
///   ordered_enum! { pub enum Rashi, all: ALL_RASHIS { Mesha => "Mesha", ... } }
macro_rules! ordered_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident, all: $all:ident {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $($variant),+
        }

        #[doc = concat!("Every `", stringify!($name), "` in order.")]
        $vis const $all: [$name; [$($label),+].len()] = [$($name::$variant),+];

        impl $name {
            const NAMES: [&'static str; [$($label),+].len()] = [$($label),+];

            /// Sanskrit name.
            pub const fn name(self) -> &'static str {
                Self::NAMES[self as usize]
            }

            /// 0-based position in the cycle.
            pub const fn index(self) -> u8 {
                self as u8
            }

            /// Variant at a 0-based position, or `None` past the end.
            pub fn from_index(idx: u8) -> Option<Self> {
                $all.get(idx as usize).copied()
            }
        }
    };
}

//! Closed tagged unions over two to five unrelated types.
//!
//! `Choose2<T0, T1>` through `Choose5<T0, .., T4>` hold exactly one value of
//! one of their type parameters. The variant is the tag, so there is no empty
//! state and no out-of-range tag. [`Choose2::fold`] and friends require one
//! handler per variant.
//!
//! The whole family is generated by a single macro.
//!
//! # Examples
//!
//! ```rust
//! use trivalent::control::Choose2;
//!
//! let value: Choose2<i32, String> = Choose2::Second("text".to_string());
//! let kind = value.fold(|_| "int", |_| "string");
//! assert_eq!(kind, "string");
//! ```

use std::fmt;

macro_rules! define_choose {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident($param:ident) => $index:literal, $handler_type:ident, $handler:ident;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name<$($param),+> {
            $(
                #[doc = concat!("Holds a value of the type parameter at index ", stringify!($index), ".")]
                $variant($param),
            )+
        }

        impl<$($param),+> $name<$($param),+> {
            /// Returns the 0-based index of the held variant.
            #[inline]
            pub const fn index(&self) -> usize {
                match self {
                    $(Self::$variant(_) => $index,)+
                }
            }

            /// Exhaustive dispatch: exactly the handler of the held variant runs.
            #[inline]
            pub fn fold<R, $($handler_type),+>(self, $($handler: $handler_type),+) -> R
            where
                $($handler_type: FnOnce($param) -> R,)+
            {
                match self {
                    $(Self::$variant(value) => $handler(value),)+
                }
            }

            paste::paste! {
                $(
                    #[doc = concat!("Returns `true` if this is `", stringify!($variant), "`.")]
                    #[inline]
                    pub const fn [<is_ $variant:snake>](&self) -> bool {
                        matches!(self, Self::$variant(_))
                    }

                    #[doc = concat!("Returns the value if this is `", stringify!($variant), "`.")]
                    #[inline]
                    pub fn [<$variant:snake>](self) -> Option<$param> {
                        match self {
                            Self::$variant(value) => Some(value),
                            #[allow(unreachable_patterns)]
                            _ => None,
                        }
                    }

                    #[doc = concat!("Borrows the value if this is `", stringify!($variant), "`.")]
                    #[inline]
                    pub const fn [<$variant:snake _ref>](&self) -> Option<&$param> {
                        match self {
                            Self::$variant(value) => Some(value),
                            #[allow(unreachable_patterns)]
                            _ => None,
                        }
                    }
                )+
            }
        }

        impl<$($param: fmt::Display),+> fmt::Display for $name<$($param),+> {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Self::$variant(value) => fmt::Display::fmt(value, formatter),)+
                }
            }
        }
    };
}

define_choose! {
    /// A value of exactly one of two types.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trivalent::control::Choose2;
    ///
    /// let number: Choose2<i32, String> = Choose2::First(7);
    /// assert_eq!(number.index(), 0);
    /// assert_eq!(number.first(), Some(7));
    /// ```
    Choose2 {
        First(T0) => 0, F0, on_first;
        Second(T1) => 1, F1, on_second;
    }
}

define_choose! {
    /// A value of exactly one of three types.
    Choose3 {
        First(T0) => 0, F0, on_first;
        Second(T1) => 1, F1, on_second;
        Third(T2) => 2, F2, on_third;
    }
}

define_choose! {
    /// A value of exactly one of four types.
    Choose4 {
        First(T0) => 0, F0, on_first;
        Second(T1) => 1, F1, on_second;
        Third(T2) => 2, F2, on_third;
        Fourth(T3) => 3, F3, on_fourth;
    }
}

define_choose! {
    /// A value of exactly one of five types.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trivalent::control::Choose5;
    ///
    /// let value: Choose5<i32, String, bool, char, f64> = Choose5::Fourth('x');
    /// let described = value.fold(
    ///     |n| format!("int {n}"),
    ///     |s| format!("string {s}"),
    ///     |b| format!("bool {b}"),
    ///     |c| format!("char {c}"),
    ///     |f| format!("float {f}"),
    /// );
    /// assert_eq!(described, "char x");
    /// ```
    Choose5 {
        First(T0) => 0, F0, on_first;
        Second(T1) => 1, F1, on_second;
        Third(T2) => 2, F2, on_third;
        Fourth(T3) => 3, F3, on_fourth;
        Fifth(T4) => 4, F4, on_fifth;
    }
}

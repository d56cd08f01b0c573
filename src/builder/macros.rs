//! Macros for declaring closed state and command enumerations.

/// Declare a state enum and implement `State` for it.
///
/// The generated enum is `Copy + Eq + Hash` and serializable, and gets an
/// `ALL` constant listing every variant in declaration order.
///
/// # Example
///
/// ```
/// use waypoint::core::State;
/// use waypoint::state_enum;
///
/// state_enum! {
///     pub enum TicketState {
///         Open,
///         InProgress,
///         Closed,
///     }
/// }
///
/// assert_eq!(TicketState::InProgress.name(), "InProgress");
/// assert_eq!(TicketState::ALL.len(), 3);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        #[allow(dead_code)]
        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Declare a command enum and implement `Command` for it.
///
/// # Example
///
/// ```
/// use waypoint::command_enum;
/// use waypoint::core::Command;
///
/// command_enum! {
///     pub enum TicketCommand {
///         Start,
///         Close,
///     }
/// }
///
/// assert_eq!(TicketCommand::Close.name(), "Close");
/// assert_eq!(TicketCommand::ALL, &[TicketCommand::Start, TicketCommand::Close]);
/// ```
#[macro_export]
macro_rules! command_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        #[allow(dead_code)]
        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
        }

        impl $crate::core::Command for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

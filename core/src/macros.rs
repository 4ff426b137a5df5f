/// Implements `Debug` for a type by printing its type name.
///
/// For types whose internals are closures or erased state that a derived
/// `Debug` could not show anyway.
#[macro_export]
macro_rules! impl_debug {
    ($ty:ty) => {
        impl core::fmt::Debug for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(core::any::type_name::<Self>())
            }
        }
    };
}

/// Defines a leaf view backed by a plain configuration struct.
///
/// Generates the view struct, marks the config as backend-handled, and wires
/// `body` so that an environment-installed [`Hook`](crate::Hook) for the
/// config type intercepts resolution; without a hook the config surfaces as
/// a [`Native`](crate::Native) leaf.
///
/// ```ignore
/// configurable!(
///     /// A push button.
///     Button,
///     ButtonConfig
/// );
/// ```
#[macro_export]
macro_rules! configurable {
    ($(#[$meta:meta])* $view:ident, $config:ty) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $view($config);

        impl $crate::NativeView for $config {}

        impl $crate::ConfigurableView for $view {
            type Config = $config;

            #[inline]
            fn config(self) -> Self::Config {
                self.0
            }
        }

        impl From<$config> for $view {
            fn from(value: $config) -> Self {
                Self(value)
            }
        }

        impl $crate::View for $view {
            fn body(self, env: $crate::Environment) -> impl $crate::View {
                use $crate::ConfigurableView;
                let config = self.config();
                if let Some(hook) = env.get::<$crate::Hook<$config>>() {
                    hook.apply(&env, config)
                } else {
                    $crate::AnyView::new($crate::Native(config))
                }
            }
        }
    };
}

macro_rules! tuples {
    ($macro:ident) => {
        $macro!();
        $macro!(T0);
        $macro!(T0, T1);
        $macro!(T0, T1, T2);
        $macro!(T0, T1, T2, T3);
        $macro!(T0, T1, T2, T3, T4);
        $macro!(T0, T1, T2, T3, T4, T5);
        $macro!(T0, T1, T2, T3, T4, T5, T6);
        $macro!(T0, T1, T2, T3, T4, T5, T6, T7);
        $macro!(T0, T1, T2, T3, T4, T5, T6, T7, T8);
        $macro!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9);
    };
}

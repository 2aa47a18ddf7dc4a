/// Registers Lua functions that forward their converted arguments to the raylib function of
/// the same name. Each argument is converted with `FromLua` and then `Into` the native type.
macro_rules! forward {
    ($lua:expr, $table:expr, { $($name:ident($($arg:ident: $ty:ty),*);)* }) => {
        $(
            $table.set(
                stringify!($name),
                $lua.create_function(|lua, ($($arg,)*): ($($ty,)*)| {
                    $crate::native::with(lua, |rl| unsafe { rl.$name($($arg.into()),*) })
                })?,
            )?;
        )*
    };
}


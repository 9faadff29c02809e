/// Builds a [`Map`](crate::Map) from `key => value` pairs.
///
/// Keys and values go through `Key::from` / `Value::from`, so literals and
/// nested `vmap!` invocations both work:
///
/// ```
/// use fieldwise_core::{Key, Value, vmap};
///
/// let m = vmap! { "a" => 1, "c" => vmap! { "aa" => 3 } };
/// assert_eq!(m.get(&Key::from("a")), Some(&Value::Int(1)));
/// ```
#[macro_export]
macro_rules! vmap {
    () => { $crate::Map::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::Map::new();
        $(
            map.insert($crate::Key::from($key), $crate::Value::from($value));
        )+
        map
    }};
}

// src/macros.rs

/// `s!()` → empty String, `s!(x)` → `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Owned concatenation: `join!(street, ", ", city)`.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $part:expr)+ $(,)?) => {{
        let mut out = ::std::string::String::from($first);
        $( out.push_str($part); )+
        out
    }};
}

/// Field map literal, in insertion order:
/// `fields! { "Beds" => "3", "Has Garage" => FieldValue::Flag(true) }`
#[macro_export]
macro_rules! fields {
    () => {
        $crate::data::FieldMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::data::FieldMap::new();
        $( map.insert($key, $value); )+
        map
    }};
}

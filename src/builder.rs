/// A builder macro that creates a `PrimeMap` from a list of key-value pairs.
///
/// Keys and values are anything convertible to `String` with `to_string()`,
/// which makes string literals usable directly.
///
/// # Examples
///
/// This example creates a `PrimeMap` without specifying the capacity.
///
/// > Note: The map is created with the minimum capacity of `31` buckets,
/// > which holds up to `23` pairs before the first resize.
///
/// ```
/// use primemap::map;
///
/// let dict = map! {
///  "one" : 1,
///  "two" : 2,
///  "three": 3,
/// };
///
/// assert_eq!(dict.len(), 3);
/// assert_eq!(dict.capacity(), 31);
///
/// assert_eq!(dict.get("one"), Some("1"));
/// assert_eq!(dict.get("two"), Some("2"));
/// assert_eq!(dict.get("three"), Some("3"));
/// ```
///
/// This example creates a `PrimeMap` with a specified capacity.
///
/// The capacity is specified before the key-value pairs and is rounded up to
/// the next prime at or above the request.
///
/// ```
/// use primemap::map;
///
/// let dict = map! {
///   50; // Capacity
///  "one" : 1,
///  "two" : 2,
/// };
///
/// assert_eq!(dict.len(), 2);
/// assert_eq!(dict.capacity(), 53);
///
/// assert_eq!(dict.get("one"), Some("1"));
/// assert_eq!(dict.get("two"), Some("2"));
/// ```
#[macro_export]
macro_rules! map {
    // Pattern without explicit capacity.
    ( $( $key:tt : $value:expr ),* $(,)? ) => {
        {
            use $crate::PrimeMap;

            let mut map = PrimeMap::new();
            $(
                map.insert($key.to_string(), $value.to_string());
            )*
            map
        }
    };
    // Pattern with explicit capacity.
    ( $capacity:expr; $( $key:tt : $value:expr ),* $(,)? ) => {
        {
            use $crate::PrimeMap;

            let mut map = PrimeMap::with_capacity($capacity);
            $(
                map.insert($key.to_string(), $value.to_string());
            )*
            map
        }
    };
    // Catch-all pattern for invalid patterns.
    ( $($tt:tt)* ) => {
        compile_error!("Invalid syntax. Use `map! { key: value, ... }` or `map! { capacity; key: value, ... }`.");
    };
}

#[cfg(test)]
mod builder_tests {
    #[test]
    fn test_builder_without_capacity() {
        let dict = map! {
            "one" : 1,
            "two" : 2,
            "three": 3,
        };

        assert_eq!(dict.len(), 3);
        assert_eq!(dict.capacity(), 31);

        assert_eq!(dict.get("one"), Some("1"));
        assert_eq!(dict.get("two"), Some("2"));
        assert_eq!(dict.get("three"), Some("3"));
    }

    #[test]
    fn test_builder_with_capacity() {
        let dict = map! {
            50; // Capacity
            "one" : 1,
            "two" : 2,
            "three": 3,
        };

        assert_eq!(dict.len(), 3);
        assert_eq!(dict.capacity(), 53);

        assert_eq!(dict.get("one"), Some("1"));
        assert_eq!(dict.get("two"), Some("2"));
        assert_eq!(dict.get("three"), Some("3"));
    }
}

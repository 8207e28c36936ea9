use indexmap::IndexMap;

/// Product name (e.g. "bread", "wheat")
pub type Product = String;

/// Cash balance in whole currency units
pub type Cash = u64;

/// Unit price in whole currency units
pub type Price = u64;

/// Number of product units
pub type Units = u32;

/// Discrete simulation time
pub type Step = u64;

/// Product -> quantity, iterated in insertion order
pub type Stock = IndexMap<Product, Units>;

/// Product -> price, iterated in insertion order
pub type PriceTable = IndexMap<Product, Price>;

pub mod prelude;
pub mod number_theory{
    pub mod radicand;
    pub mod digit_pair_square_root;
    pub mod integer_square_root;
}
pub mod presentation{
    pub mod scaled_decimal;
    pub mod root_identity;
}

pub use number_theory::digit_pair_square_root::compute_root;

pub mod prelude;
pub mod config;
pub mod samples {
    pub mod sample_set;
}
pub mod interpolation {
    pub mod estimation_trait;
    pub mod newton_interpolator;
    pub mod lagrange_interpolator;
    pub mod cubic_spline_interpolator;
}
pub mod regression {
    pub mod linear_regressor;
}
pub mod estimation {
    pub mod method;
    pub mod orchestrator;
    pub mod reference;
}
pub mod datasets {
    pub mod strawberry_growth;
}
pub mod observe {
    pub mod logging;
}

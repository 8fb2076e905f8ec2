pub mod cli {
    pub mod argumenterror;
    pub mod arguments;
    pub mod application;
}

pub mod configuration;

pub mod driver {
    pub mod extrapolationdriver;
}

pub mod math {
    pub mod curve {
        pub mod curve;
        pub mod quadraticpolynomial;
    }
    pub mod extrapolation {
        pub mod stepsequence;
        pub mod tangentextrapolator;
    }
}

pub mod report {
    pub mod extrapolationrow;
    pub mod resultsink;
    pub mod tablesink;
    pub mod jsonlinessink;
    pub mod collectingsink;
}

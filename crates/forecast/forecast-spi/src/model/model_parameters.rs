//! Strongly typed SARIMA hyperparameters

use crate::error::ValidationError;

/// Forecast horizon used when a request does not specify `steps`
pub const DEFAULT_STEPS: usize = 10;

/// Non-seasonal orders `(p, d, q)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Order {
    /// Autoregressive order
    pub p: usize,
    /// Differencing order
    pub d: usize,
    /// Moving-average order
    pub q: usize,
}

impl Order {
    pub fn new(p: usize, d: usize, q: usize) -> Self {
        Self { p, d, q }
    }
}

impl From<[usize; 3]> for Order {
    fn from([p, d, q]: [usize; 3]) -> Self {
        Self::new(p, d, q)
    }
}

/// Seasonal orders `(P, D, Q, m)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonalOrder {
    /// Seasonal autoregressive order
    pub p: usize,
    /// Seasonal differencing order
    pub d: usize,
    /// Seasonal moving-average order
    pub q: usize,
    /// Seasonal period, at least 1
    pub period: usize,
}

impl SeasonalOrder {
    /// Create a seasonal order, rejecting a zero period
    pub fn new(p: usize, d: usize, q: usize, period: usize) -> Result<Self, ValidationError> {
        if period == 0 {
            return Err(ValidationError::InvalidSeasonalPeriod);
        }
        Ok(Self { p, d, q, period })
    }

    /// Seasonal order without seasonal terms
    pub fn none() -> Self {
        Self {
            p: 0,
            d: 0,
            q: 0,
            period: 1,
        }
    }

    /// Whether any seasonal AR, differencing or MA term is requested
    pub fn has_terms(&self) -> bool {
        self.p + self.d + self.q > 0
    }
}

impl Default for SeasonalOrder {
    fn default() -> Self {
        Self::none()
    }
}

/// Validated parameters for one forecasting request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelParameters {
    order: Order,
    seasonal_order: SeasonalOrder,
    steps: usize,
}

impl ModelParameters {
    /// Build parameters, rejecting a zero horizon
    pub fn new(
        order: Order,
        seasonal_order: SeasonalOrder,
        steps: usize,
    ) -> Result<Self, ValidationError> {
        if steps == 0 {
            return Err(ValidationError::InvalidSteps);
        }
        Ok(Self {
            order,
            seasonal_order,
            steps,
        })
    }

    /// Parameters with the default horizon of [`DEFAULT_STEPS`]
    pub fn with_default_steps(order: Order, seasonal_order: SeasonalOrder) -> Self {
        Self {
            order,
            seasonal_order,
            steps: DEFAULT_STEPS,
        }
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn seasonal_order(&self) -> SeasonalOrder {
        self.seasonal_order
    }

    pub fn steps(&self) -> usize {
        self.steps
    }
}

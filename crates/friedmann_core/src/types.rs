use serde::{Deserialize, Serialize};
use std::fmt;

/// Energy components of an FLRW universe, in reporting priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Component {
    Matter,
    Lambda,
    Radiation,
}

impl Component {
    pub const ALL: [Component; 3] = [Self::Matter, Self::Lambda, Self::Radiation];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Matter => "matter",
            Self::Lambda => "lambda",
            Self::Radiation => "radiation",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which two components are present in a two-component universe.
/// The first-named component is the primary one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentPair {
    MatterLambda,
    MatterRadiation,
    LambdaRadiation,
}

impl ComponentPair {
    /// (primary, secondary)
    pub fn components(&self) -> (Component, Component) {
        match self {
            Self::MatterLambda => (Component::Matter, Component::Lambda),
            Self::MatterRadiation => (Component::Matter, Component::Radiation),
            Self::LambdaRadiation => (Component::Lambda, Component::Radiation),
        }
    }
}

/// Number and identity of the strictly positive density components.
/// Selects the closed-form branch of the density solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Arity {
    Three,
    Two(ComponentPair),
    /// Zero or one component present
    Underdetermined(usize),
}

impl Arity {
    pub fn classify(matter: f64, lambda: f64, radiation: f64) -> Self {
        match (matter > 0.0, lambda > 0.0, radiation > 0.0) {
            (true, true, true) => Self::Three,
            (true, true, false) => Self::Two(ComponentPair::MatterLambda),
            (true, false, true) => Self::Two(ComponentPair::MatterRadiation),
            (false, true, true) => Self::Two(ComponentPair::LambdaRadiation),
            (m, l, r) => Self::Underdetermined(m as usize + l as usize + r as usize),
        }
    }

    pub fn count(&self) -> usize {
        match self {
            Self::Three => 3,
            Self::Two(_) => 2,
            Self::Underdetermined(n) => *n,
        }
    }
}

/// Density parameters at some scale factor.
/// Only the components present in the model are carried.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ComponentDensities {
    Three {
        matter: f64,
        lambda: f64,
        radiation: f64,
    },
    Two {
        pair: ComponentPair,
        primary: f64,
        secondary: f64,
    },
}

impl ComponentDensities {
    /// Density of one component, 0.0 if it is absent from the model
    pub fn get(&self, component: Component) -> f64 {
        match *self {
            Self::Three {
                matter,
                lambda,
                radiation,
            } => match component {
                Component::Matter => matter,
                Component::Lambda => lambda,
                Component::Radiation => radiation,
            },
            Self::Two {
                pair,
                primary,
                secondary,
            } => {
                let (first, second) = pair.components();
                if component == first {
                    primary
                } else if component == second {
                    secondary
                } else {
                    0.0
                }
            }
        }
    }

    pub fn matter(&self) -> f64 {
        self.get(Component::Matter)
    }

    pub fn lambda(&self) -> f64 {
        self.get(Component::Lambda)
    }

    pub fn radiation(&self) -> f64 {
        self.get(Component::Radiation)
    }

    /// Values of the present components, in matter, lambda, radiation order
    pub fn values(&self) -> Vec<f64> {
        match *self {
            Self::Three {
                matter,
                lambda,
                radiation,
            } => vec![matter, lambda, radiation],
            Self::Two {
                primary, secondary, ..
            } => vec![primary, secondary],
        }
    }

    pub fn total(&self) -> f64 {
        self.values().iter().sum()
    }

    /// The component with the largest density parameter
    pub fn dominant(&self) -> Component {
        Component::ALL
            .into_iter()
            .fold(Component::Matter, |best, c| {
                if self.get(c) > self.get(best) { c } else { best }
            })
    }
}

/// Cosmic epoch, named after the component driving the expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Epoch {
    Radiation,
    Matter,
    Lambda,
}

impl Epoch {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Radiation => "Radiation Era",
            Self::Matter => "Matter Era",
            Self::Lambda => "Dark Energy Era",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_uses_strict_positivity() {
        assert_eq!(Arity::classify(0.31, 0.69, 9e-5), Arity::Three);
        assert_eq!(
            Arity::classify(0.3, 0.0, 1e-4),
            Arity::Two(ComponentPair::MatterRadiation)
        );
        assert_eq!(
            Arity::classify(0.0, 0.7, 1e-4),
            Arity::Two(ComponentPair::LambdaRadiation)
        );
        assert_eq!(Arity::classify(1.0, 0.0, 0.0), Arity::Underdetermined(1));
        assert_eq!(Arity::classify(0.0, 0.0, 0.0), Arity::Underdetermined(0));
        // A negative density is not "present"
        assert_eq!(Arity::classify(-0.1, 0.7, 0.0), Arity::Underdetermined(1));
    }

    #[test]
    fn test_two_component_accessors() {
        let d = ComponentDensities::Two {
            pair: ComponentPair::LambdaRadiation,
            primary: 0.75,
            secondary: 0.25,
        };
        assert_eq!(d.matter(), 0.0);
        assert_eq!(d.lambda(), 0.75);
        assert_eq!(d.radiation(), 0.25);
        assert_eq!(d.values(), vec![0.75, 0.25]);
        assert_eq!(d.dominant(), Component::Lambda);
    }

    #[test]
    fn test_dominant_component() {
        let d = ComponentDensities::Three {
            matter: 0.2,
            lambda: 0.1,
            radiation: 0.7,
        };
        assert_eq!(d.dominant(), Component::Radiation);
        assert!((d.total() - 1.0).abs() < 1e-12);
    }
}

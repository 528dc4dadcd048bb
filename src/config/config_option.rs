/// A configuration option, with a name and the bounds of acceptable values.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    /// The name of the option, as used by the cli.
    pub name: &'static str,

    /// The least acceptable value.
    pub min: T,

    /// The greatest acceptable value.
    pub max: T,

    /// The value of the option.
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value of the option, if the value is within bounds, and returns whether the value was set.
    pub fn set(&mut self, value: T) -> bool {
        match self.min <= value && value <= self.max {
            true => {
                self.value = value;
                true
            }
            false => false,
        }
    }
}

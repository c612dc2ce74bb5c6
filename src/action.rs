/// An action drawn from one of an environment's catalogues.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Action {
    pub id: usize,
    pub values: Vec<f64>,
}

impl Action {
    pub fn new(id: usize, value: f64) -> Self {
        Self {
            id,
            values: vec![value],
        }
    }

    /// Builds an action that shares `id` with a catalogue entry but carries its own value.
    pub fn with_value(&self, value: f64) -> Self {
        Self::new(self.id, value)
    }

    pub fn at(&self, index: usize) -> f64 {
        self.values[index]
    }

    pub fn dimension(&self) -> usize {
        self.values.len()
    }
}

/// Ordered action catalogue. Filled while an environment is built, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionList {
    actions: Vec<Action>,
}

impl ActionList {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            actions: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, id: usize, value: f64) {
        self.actions.push(Action::new(id, value));
    }

    pub fn get(&self, id: usize) -> Option<&Action> {
        self.actions.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }
}

impl<'a> IntoIterator for &'a ActionList {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

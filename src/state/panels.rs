/// Open/closed state of the collapsible panels
///
/// A panel starts closed and toggling is its only transition. Closed
/// panels keep their content in the widget tree (see `ui::collapse`).

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Collapse {
    open: bool,
}

impl Collapse {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

/// Which column a panel belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Steps,
    Knowledge,
}

/// One steps panel and one knowledge panel per question of a result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultPanels {
    steps: Vec<Collapse>,
    knowledge: Vec<Collapse>,
}

impl ResultPanels {
    /// Fresh, all-closed panels for a result with `questions` questions
    pub fn new(questions: usize) -> Self {
        Self {
            steps: vec![Collapse::default(); questions],
            knowledge: vec![Collapse::default(); questions],
        }
    }

    pub fn section(&self, section: Section) -> &[Collapse] {
        match section {
            Section::Steps => &self.steps,
            Section::Knowledge => &self.knowledge,
        }
    }

    pub fn is_open(&self, section: Section, question: usize) -> bool {
        self.section(section)
            .get(question)
            .is_some_and(Collapse::is_open)
    }

    /// Toggle a panel; out-of-range indices are ignored
    pub fn toggle(&mut self, section: Section, question: usize) {
        let panels = match section {
            Section::Steps => &mut self.steps,
            Section::Knowledge => &mut self.knowledge,
        };
        if let Some(panel) = panels.get_mut(question) {
            panel.toggle();
        }
    }

    pub fn clear(&mut self) {
        self.steps.clear();
        self.knowledge.clear();
    }
}

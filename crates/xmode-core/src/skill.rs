/// A named proficiency bar on the about page.
///
/// The fill starts at 0% and jumps to the stored level once the bar's
/// region is revealed; the stylesheet animates the width change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillBar {
    name: String,
    level: u8,
}

impl SkillBar {
    pub fn new(name: &str, level: u8) -> Self {
        Self {
            name: name.to_string(),
            level: level.min(100),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Target fill percentage for the current reveal state
    pub fn fill_percent(&self, revealed: bool) -> u8 {
        if revealed {
            self.level
        } else {
            0
        }
    }

    /// Inline `width` value for the fill element
    pub fn fill_width(&self, revealed: bool) -> String {
        format!("{}%", self.fill_percent(revealed))
    }

    pub fn level_label(&self) -> String {
        format!("{}%", self.level)
    }
}

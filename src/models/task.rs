//! Checklist gating the exchange.

/// Beny points credited per checklist item.
pub const POINTS_PER_TASK: u32 = 20;

/// Number of checklist items.
pub const TASK_COUNT: usize = 3;

const TASK_TEXTS: [&str; TASK_COUNT] = [
    "Verifica tu ticket reclamado",
    "Comparte en Twitter que llegas a esta fiesta",
    "Haz CLICK y canjea tus tokens",
];

/// One checklist item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// 1-based position, also the number shown in the badge.
    pub id: u8,
    pub text: String,
    pub completed: bool,
}

/// The three fixed tasks that must all be completed before exchanging.
///
/// A fresh checklist is built every time the exchange screen is entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checklist {
    tasks: [Task; TASK_COUNT],
}

impl Checklist {
    /// Creates the checklist with every task pending.
    pub fn new() -> Self {
        let task = |i: usize| Task {
            id: i as u8 + 1,
            text: TASK_TEXTS[i].to_string(),
            completed: false,
        };
        Self {
            tasks: std::array::from_fn(task),
        }
    }

    /// Flips the completion of the task with `id`. Unknown ids are ignored.
    pub fn toggle(&mut self, id: u8) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
        }
    }

    /// Whether the exchange may be triggered.
    pub fn all_completed(&self) -> bool {
        self.tasks.iter().all(|t| t.completed)
    }

    /// Number of completed tasks.
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

impl Default for Checklist {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_three_pending_tasks() {
        let checklist = Checklist::new();
        let ids: Vec<u8> = checklist.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(checklist.completed_count(), 0);
        assert!(!checklist.all_completed());
    }

    #[test]
    fn all_completed_only_when_every_task_is_done() {
        let mut checklist = Checklist::new();
        checklist.toggle(1);
        checklist.toggle(3);
        assert!(!checklist.all_completed());
        checklist.toggle(2);
        assert!(checklist.all_completed());
    }

    #[test]
    fn toggle_flips_back_and_forth() {
        let mut checklist = Checklist::new();
        checklist.toggle(2);
        checklist.toggle(2);
        assert_eq!(checklist.completed_count(), 0);
    }

    #[test]
    fn order_does_not_matter() {
        let mut checklist = Checklist::new();
        for id in [3, 1, 2] {
            checklist.toggle(id);
        }
        assert!(checklist.all_completed());
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut checklist = Checklist::new();
        checklist.toggle(0);
        checklist.toggle(4);
        assert_eq!(checklist, Checklist::new());
    }
}

use chrono::NaiveDate;

/// Names and descriptions must be strictly shorter than this many characters.
pub const MAX_FIELD_LEN: usize = 50;

/// Stable identity of a task within one collection (and its snapshots).
///
/// Unlike [`Task::id`], a key never changes when the collection is sorted or
/// a sibling is removed. Keys are not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskKey(u64);

/// A single to-do record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Display number, 1..N in collection order. Reassigned on every
    /// structural change, so never cache it across a mutation.
    pub id: usize,
    pub name: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub completed: bool,
    key: Option<TaskKey>,
}

impl Task {
    /// Create an incomplete task. The id is assigned when it is added to a
    /// collection; field limits are enforced by `ops::task_ops::new_task`.
    pub fn new(name: impl Into<String>, description: impl Into<String>, due_date: NaiveDate) -> Self {
        Task {
            id: 0,
            name: name.into(),
            description: description.into(),
            due_date,
            completed: false,
            key: None,
        }
    }

    /// The stable key, once the task belongs to a collection
    pub fn key(&self) -> Option<TaskKey> {
        self.key
    }
}

/// Which subset of tasks a view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Completed,
    Incomplete,
}

impl Filter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Completed => task.completed,
            Filter::Incomplete => !task.completed,
        }
    }

    /// all → completed → incomplete → all
    pub fn next(self) -> Filter {
        match self {
            Filter::All => Filter::Completed,
            Filter::Completed => Filter::Incomplete,
            Filter::Incomplete => Filter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Completed => "completed",
            Filter::Incomplete => "incomplete",
        }
    }
}

/// The ordered, owned set of tasks.
///
/// Invariant: after any mutating call returns, the task ids are exactly
/// `1..=len()` in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskCollection {
    tasks: Vec<Task>,
    next_key: u64,
}

impl TaskCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task, giving it the smallest positive id not in use and a
    /// fresh key. Any incoming id or key is overwritten.
    pub fn add(&mut self, mut task: Task) -> TaskKey {
        let mut id = 1;
        while self.tasks.iter().any(|t| t.id == id) {
            id += 1;
        }
        let key = TaskKey(self.next_key);
        self.next_key += 1;

        task.id = id;
        task.key = Some(key);
        self.tasks.push(task);
        key
    }

    /// Remove the task with this key and renumber the rest.
    /// Returns `None` (and changes nothing) if the key is not present.
    pub fn remove(&mut self, key: TaskKey) -> Option<Task> {
        let idx = self.tasks.iter().position(|t| t.key == Some(key))?;
        let task = self.tasks.remove(idx);
        self.renumber();
        Some(task)
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Live, ordered view of every task
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn completed(&self) -> Vec<&Task> {
        self.view(Filter::Completed)
    }

    pub fn incomplete(&self) -> Vec<&Task> {
        self.view(Filter::Incomplete)
    }

    /// Tasks matching `filter`, in collection order
    pub fn view(&self, filter: Filter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    /// Earliest due date first; equal dates keep their relative order.
    pub fn sort_by_due_date(&mut self) {
        self.tasks.sort_by(|a, b| a.due_date.cmp(&b.due_date));
        self.renumber();
    }

    /// Case-sensitive lexicographic by name; equal names keep their relative order.
    pub fn sort_by_name(&mut self) {
        self.tasks.sort_by(|a, b| a.name.cmp(&b.name));
        self.renumber();
    }

    /// Set the completion flag. Returns false if the key is not present.
    pub fn set_completed(&mut self, key: TaskKey, completed: bool) -> bool {
        match self.tasks.iter_mut().find(|t| t.key == Some(key)) {
            Some(task) => {
                task.completed = completed;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, key: TaskKey) -> Option<&Task> {
        self.tasks.iter().find(|t| t.key == Some(key))
    }

    /// Look up a task by its current display number
    pub fn get_by_id(&self, id: usize) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// An independent snapshot: same tasks, ids, keys and order, sharing
    /// nothing with `self`.
    pub fn copy(&self) -> TaskCollection {
        self.clone()
    }

    fn renumber(&mut self) {
        for (i, task) in self.tasks.iter_mut().enumerate() {
            task.id = i + 1;
        }
    }
}

impl<'a> IntoIterator for &'a TaskCollection {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

use crate::domain::entities::JobRecord;
use crate::domain::value_objects::JobId;

/// Which record, if any, the admin is currently modifying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing(JobId),
}

/// Per-client synchronization session: the last successfully listed
/// collection plus the edit target. The cached list is replaced only by a
/// successful list, so it goes stale after every mutation until the next
/// fetch; edits read it anyway because the id, not the field values, is what
/// a submit needs.
#[derive(Debug, Clone, Default)]
pub struct SyncSession {
    jobs: Vec<JobRecord>,
    edit: EditState,
}

impl SyncSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    pub fn replace_jobs(&mut self, jobs: Vec<JobRecord>) {
        self.jobs = jobs;
    }

    pub fn cached_job(&self, id: JobId) -> Option<&JobRecord> {
        self.jobs.iter().find(|job| job.id == id)
    }

    pub fn edit_state(&self) -> EditState {
        self.edit
    }

    pub fn editing_id(&self) -> Option<JobId> {
        match self.edit {
            EditState::Editing(id) => Some(id),
            EditState::Idle => None,
        }
    }

    /// Enter edit mode for a record from the cached list. Starting a new
    /// edit while one is open silently replaces the prior target. The list
    /// is not re-fetched; a stale cache still yields the correct id.
    pub fn begin_edit(&mut self, id: JobId) -> Result<&JobRecord, String> {
        let pos = self
            .jobs
            .iter()
            .position(|job| job.id == id)
            .ok_or_else(|| format!("Job {id} is not in the last fetched list"))?;
        self.edit = EditState::Editing(id);
        Ok(&self.jobs[pos])
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditState::Idle;
    }

    /// Called after a successful submit, remote or local.
    pub fn finish_edit(&mut self) {
        self.edit = EditState::Idle;
    }
}

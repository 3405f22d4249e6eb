use crate::{
    data::{
        feeds::{FamilyBlood, RawStudent},
        student::{Student, StudentFlags},
    },
    error::{InquisitorResult, MissingBloodLookupSnafu, MissingStudentSnafu},
};
use snafu::OptionExt;
use uuid::Uuid;

/// Every student of the session, in feed order. Students are never removed.
#[derive(Debug, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Student> {
        self.students.iter().find(|student| student.id == id)
    }

    pub fn set_flag(&mut self, id: Uuid, flag: StudentFlags) -> InquisitorResult<&Student> {
        let student = self
            .students
            .iter_mut()
            .find(|student| student.id == id)
            .context(MissingStudentSnafu { id })?;
        student.set_flag(flag);
        Ok(student)
    }
}

#[derive(Debug, Default)]
pub struct RosterBuilder {
    records: Vec<RawStudent>,
    family_blood: Option<FamilyBlood>,
}

impl RosterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_records(mut self, records: impl IntoIterator<Item = RawStudent>) -> Self {
        self.records.extend(records);
        self
    }

    #[must_use]
    pub fn with_family_blood(mut self, family_blood: FamilyBlood) -> Self {
        self.family_blood = Some(family_blood);
        self
    }

    ///fails if the family blood lists never arrived, rather than calling everyone a muggleborn
    pub fn build(self) -> InquisitorResult<Roster> {
        let family_blood = self.family_blood.context(MissingBloodLookupSnafu)?;

        let students = self
            .records
            .into_iter()
            .map(|raw| Student::from_raw(raw, &family_blood))
            .collect();

        Ok(Roster { students })
    }
}

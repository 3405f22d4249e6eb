use crate::data::feeds::{FamilyBlood, RawStudent};
use bitflags::bitflags;
use maud::Render;
use uuid::Uuid;

///surname used when a full name only has a single token
pub const UNKNOWN_SURNAME: &str = "Unknown";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BloodStatus {
    Pureblood,
    Halfblood,
    Muggleblood,
}

impl BloodStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pureblood => "Pureblood",
            Self::Halfblood => "Halfblood",
            Self::Muggleblood => "Muggleblood",
        }
    }
}

impl Render for BloodStatus {
    fn render_to(&self, buffer: &mut String) {
        buffer.push_str(self.as_str());
    }
}

bitflags! {
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
    pub struct StudentFlags: u8 {
        const PREFECT =   0b0000_0001;
        const INQ_SQUAD = 0b0000_0010;
        const EXPELLED =  0b0000_0100;
    }
}

impl StudentFlags {
    ///the names the flag actions use on the wire
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "isPrefect" => Some(Self::PREFECT),
            "isInqSquadMember" => Some(Self::INQ_SQUAD),
            "isExpelled" => Some(Self::EXPELLED),
            _ => None,
        }
    }

    pub fn wire_name(self) -> Option<&'static str> {
        if self == Self::PREFECT {
            Some("isPrefect")
        } else if self == Self::INQ_SQUAD {
            Some("isInqSquadMember")
        } else if self == Self::EXPELLED {
            Some("isExpelled")
        } else {
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct Student {
    pub id: Uuid,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub gender: String,
    pub house: String,
    pub blood_status: BloodStatus,
    pub flags: StudentFlags,
}

/// First character uppercased, everything after it lowercased.
pub fn capitalise(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}

#[derive(Debug, PartialEq, Eq)]
pub struct SplitName {
    pub first: String,
    pub middle: String,
    pub last: String,
}

/// Splits a full name on whitespace into capitalised first, middle and last parts.
///
/// A name with a single token gets [`UNKNOWN_SURNAME`] as its last name, and an empty full name
/// gets an empty first name alongside it.
pub fn split_full_name(full_name: &str) -> SplitName {
    let mut tokens: Vec<String> = full_name.split_whitespace().map(capitalise).collect();

    let first = if tokens.is_empty() {
        String::new()
    } else {
        tokens.remove(0)
    };
    let last = tokens.pop().unwrap_or_else(|| UNKNOWN_SURNAME.to_string());

    SplitName {
        first,
        middle: tokens.join(" "),
        last,
    }
}

impl Student {
    pub fn from_raw(raw: RawStudent, family_blood: &FamilyBlood) -> Self {
        let SplitName {
            first,
            middle,
            last,
        } = split_full_name(raw.fullname.as_deref().unwrap_or_default());
        let blood_status = family_blood.classify(&last);

        Self {
            id: Uuid::new_v4(),
            first_name: first,
            middle_name: middle,
            last_name: last,
            gender: raw.gender.unwrap_or_default(),
            house: capitalise(raw.house.as_deref().unwrap_or_default().trim()),
            blood_status,
            flags: StudentFlags::empty(),
        }
    }

    pub fn is_prefect(&self) -> bool {
        self.flags.contains(StudentFlags::PREFECT)
    }

    pub fn is_inq_squad_member(&self) -> bool {
        self.flags.contains(StudentFlags::INQ_SQUAD)
    }

    pub fn is_expelled(&self) -> bool {
        self.flags.contains(StudentFlags::EXPELLED)
    }

    ///one-way, there is no way to take a flag back off
    pub fn set_flag(&mut self, flag: StudentFlags) {
        self.flags.insert(flag);
    }

    pub fn name(&self) -> String {
        //if this ever includes HTML, render_to needs to change
        self.render().0
    }

    pub fn given_names(&self) -> String {
        if self.middle_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.middle_name)
        }
    }

    /// File stem of this student's portrait, eg. `finch-fletchley` + `Justin` gives `fletchley_j`.
    pub fn portrait_stem(&self) -> String {
        match self.first_name.as_str() {
            //the twins don't follow the usual naming
            "Parvati" => "patil_parvati".to_string(),
            "Padma" => "patil_padme".to_string(),
            _ => {
                let surname_part = self.last_name.rsplit('-').next().unwrap_or_default();
                let initial: String = self.first_name.chars().take(1).collect();
                format!("{surname_part}_{initial}").to_lowercase()
            }
        }
    }
}

impl Render for Student {
    fn render_to(&self, buffer: &mut String) {
        buffer.push_str(&self.first_name);
        buffer.push(' ');
        buffer.push_str(&self.last_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(fullname: &str, house: &str) -> RawStudent {
        RawStudent {
            fullname: Some(fullname.to_string()),
            house: Some(house.to_string()),
            gender: Some("boy".to_string()),
        }
    }

    #[test]
    fn capitalise_lowers_the_tail() {
        assert_eq!(capitalise("gRYFFINDOR"), "Gryffindor");
        assert_eq!(capitalise("h"), "H");
        assert_eq!(capitalise(""), "");
        assert_eq!(capitalise("finch-FLETCHLEY"), "Finch-fletchley");
    }

    #[test]
    fn two_tokens() {
        let student = Student::from_raw(raw("Harry Potter", "gryffindor"), &FamilyBlood::default());
        assert_eq!(student.first_name, "Harry");
        assert_eq!(student.last_name, "Potter");
        assert_eq!(student.middle_name, "");
        assert_eq!(student.house, "Gryffindor");
        assert_eq!(student.gender, "boy");
        assert_eq!(student.blood_status, BloodStatus::Muggleblood);
        assert_eq!(student.flags, StudentFlags::empty());
    }

    #[test]
    fn middle_names_are_joined_and_capitalised() {
        let split = split_full_name("  ernest   \"ernie\" MACMILLAN ");
        assert_eq!(split.first, "Ernest");
        assert_eq!(split.middle, "\"ernie\"");
        assert_eq!(split.last, "Macmillan");

        let split = split_full_name("hannah abigail jane abbott");
        assert_eq!(split.middle, "Abigail Jane");
        assert_eq!(split.last, "Abbott");
    }

    #[test]
    fn single_token_gets_unknown_surname() {
        let split = split_full_name(" leanne ");
        assert_eq!(
            split,
            SplitName {
                first: "Leanne".into(),
                middle: String::new(),
                last: UNKNOWN_SURNAME.into(),
            }
        );
    }

    #[test]
    fn missing_fields_fall_back_to_empty() {
        let student = Student::from_raw(RawStudent::default(), &FamilyBlood::default());
        assert_eq!(student.first_name, "");
        assert_eq!(student.last_name, UNKNOWN_SURNAME);
        assert_eq!(student.house, "");
        assert_eq!(student.gender, "");
    }

    #[test]
    fn house_is_trimmed() {
        let student = Student::from_raw(raw("Cho Chang", "  rAvEnClAw "), &FamilyBlood::default());
        assert_eq!(student.house, "Ravenclaw");
    }

    #[test]
    fn flags_are_one_way_and_independent() {
        let mut student = Student::from_raw(raw("Draco Malfoy", "slytherin"), &FamilyBlood::default());
        student.set_flag(StudentFlags::INQ_SQUAD);
        student.set_flag(StudentFlags::INQ_SQUAD);
        assert!(student.is_inq_squad_member());
        assert!(!student.is_prefect());
        assert!(!student.is_expelled());
    }

    #[test]
    fn flag_wire_names() {
        for flag in [
            StudentFlags::PREFECT,
            StudentFlags::INQ_SQUAD,
            StudentFlags::EXPELLED,
        ] {
            let name = flag.wire_name().unwrap();
            assert_eq!(StudentFlags::from_wire(name), Some(flag));
        }
        assert_eq!(StudentFlags::from_wire("isHeadBoy"), None);
        assert_eq!(StudentFlags::all().wire_name(), None);
    }

    #[test]
    fn portraits() {
        let family_blood = FamilyBlood::default();
        let justin = Student::from_raw(raw("Justin Finch-fletchley", "hufflepuff"), &family_blood);
        assert_eq!(justin.portrait_stem(), "fletchley_j");

        let harry = Student::from_raw(raw("Harry James Potter", "gryffindor"), &family_blood);
        assert_eq!(harry.portrait_stem(), "potter_h");

        let padma = Student::from_raw(raw("Padma Patil", "ravenclaw"), &family_blood);
        assert_eq!(padma.portrait_stem(), "patil_padme");
        let parvati = Student::from_raw(raw("Parvati Patil", "gryffindor"), &family_blood);
        assert_eq!(parvati.portrait_stem(), "patil_parvati");
    }

    #[test]
    fn renders_first_and_last() {
        let student = Student::from_raw(raw("Harry James Potter", "gryffindor"), &FamilyBlood::default());
        assert_eq!(student.render().into_string(), "Harry Potter");
        assert_eq!(student.given_names(), "Harry James");
    }
}

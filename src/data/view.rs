use crate::{
    config::collation::Collation,
    data::{roster::Roster, student::Student},
};
use serde::Deserialize;

pub const KNOWN_HOUSES: [&str; 4] = ["Gryffindor", "Hufflepuff", "Ravenclaw", "Slytherin"];
pub const ALL_HOUSES: &str = "All";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SortKey {
    FirstName,
    MiddleName,
    #[default]
    LastName,
    House,
    BloodStatus,
    Gender,
}

impl SortKey {
    pub const ALL: [Self; 6] = [
        Self::FirstName,
        Self::MiddleName,
        Self::LastName,
        Self::House,
        Self::BloodStatus,
        Self::Gender,
    ];

    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.wire_name() == name)
    }

    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::MiddleName => "middleName",
            Self::LastName => "lastName",
            Self::House => "house",
            Self::BloodStatus => "bloodStatus",
            Self::Gender => "gender",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::MiddleName => "Middle Name",
            Self::LastName => "Last Name",
            Self::House => "House",
            Self::BloodStatus => "Blood Status",
            Self::Gender => "Gender",
        }
    }

    pub fn field(self, student: &Student) -> &str {
        match self {
            Self::FirstName => &student.first_name,
            Self::MiddleName => &student.middle_name,
            Self::LastName => &student.last_name,
            Self::House => &student.house,
            Self::BloodStatus => student.blood_status.as_str(),
            Self::Gender => &student.gender,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HouseFilter {
    #[default]
    All,
    House(&'static str),
}

impl HouseFilter {
    ///anything other than a known house name is treated like `All`
    pub fn from_wire(name: &str) -> Self {
        KNOWN_HOUSES
            .into_iter()
            .find(|house| *house == name)
            .map_or(Self::All, Self::House)
    }

    pub fn matches(&self, student: &Student) -> bool {
        match self {
            Self::All => true,
            Self::House(house) => student.house == *house,
        }
    }
}

/// The query the roster controls send with every list request.
#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub house: Option<String>,
}

impl ViewQuery {
    ///`None` when the client asked for a key we don't know, which leaves the roster order alone
    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort
            .as_deref()
            .map_or(Some(SortKey::default()), SortKey::from_wire)
    }

    pub fn house_filter(&self) -> HouseFilter {
        self.house
            .as_deref()
            .map_or(HouseFilter::All, HouseFilter::from_wire)
    }
}

/// Sorts the whole roster by `sort_key` (stable, so ties keep roster order), then keeps the
/// students the filter lets through.
pub fn render_view<'a>(
    roster: &'a Roster,
    sort_key: Option<SortKey>,
    filter: &HouseFilter,
    collation: &Collation,
) -> Vec<&'a Student> {
    let mut view: Vec<&Student> = roster.students().iter().collect();

    if let Some(key) = sort_key {
        view.sort_by(|a, b| collation.compare(key.field(a), key.field(b)));
    }
    view.retain(|student| filter.matches(student));

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::roster::tests::roster_of;

    fn names(view: &[&Student]) -> Vec<String> {
        view.iter()
            .map(|student| format!("{} {}", student.first_name, student.last_name))
            .collect()
    }

    fn school() -> Roster {
        roster_of(&[
            ("Harry Potter", "gryffindor"),
            ("Draco Malfoy", "slytherin"),
            ("Hermione Granger", "gryffindor"),
            ("Cho Chang", "ravenclaw"),
            ("Ron Weasley", "gryffindor"),
            ("Ginny Weasley", "gryffindor"),
            ("Cedric Diggory", "hufflepuff"),
        ])
    }

    #[test]
    fn all_is_identity() {
        let roster = school();
        let view = render_view(&roster, None, &HouseFilter::All, &Collation::root().unwrap());
        let expected: Vec<&Student> = roster.students().iter().collect();
        assert_eq!(names(&view), names(&expected));
    }

    #[test]
    fn filter_keeps_roster_order() {
        let roster = roster_of(&[
            ("Harry Potter", "Gryffindor"),
            ("Draco Malfoy", "Slytherin"),
            ("Hermione Granger", "Gryffindor"),
        ]);
        let view = render_view(
            &roster,
            None,
            &HouseFilter::House("Gryffindor"),
            &Collation::root().unwrap(),
        );
        assert_eq!(names(&view), ["Harry Potter", "Hermione Granger"]);
    }

    #[test]
    fn sort_is_stable() {
        let roster = school();
        let view = render_view(
            &roster,
            Some(SortKey::LastName),
            &HouseFilter::All,
            &Collation::root().unwrap(),
        );
        assert_eq!(
            names(&view),
            [
                "Cho Chang",
                "Cedric Diggory",
                "Hermione Granger",
                "Draco Malfoy",
                "Harry Potter",
                "Ron Weasley",
                "Ginny Weasley",
            ]
        );
    }

    #[test]
    fn sort_by_house_then_filter() {
        let roster = school();
        let collation = Collation::root().unwrap();
        let view = render_view(
            &roster,
            Some(SortKey::FirstName),
            &HouseFilter::from_wire("Gryffindor"),
            &collation,
        );
        assert_eq!(
            names(&view),
            ["Ginny Weasley", "Harry Potter", "Hermione Granger", "Ron Weasley"]
        );

        let by_house = render_view(&roster, Some(SortKey::House), &HouseFilter::All, &collation);
        let houses: Vec<&str> = by_house.iter().map(|s| s.house.as_str()).collect();
        assert_eq!(
            houses,
            [
                "Gryffindor",
                "Gryffindor",
                "Gryffindor",
                "Gryffindor",
                "Hufflepuff",
                "Ravenclaw",
                "Slytherin",
            ]
        );
        //ties keep roster order
        assert_eq!(by_house[0].first_name, "Harry");
        assert_eq!(by_house[3].first_name, "Ginny");
    }

    #[test]
    fn sorting_is_idempotent() {
        let roster = school();
        let collation = Collation::root().unwrap();
        for key in SortKey::ALL {
            let once = render_view(&roster, Some(key), &HouseFilter::All, &collation);
            let mut twice = once.clone();
            twice.sort_by(|a, b| collation.compare(key.field(a), key.field(b)));
            assert_eq!(names(&once), names(&twice), "{key:?}");
        }
    }

    #[test]
    fn filter_and_sort_commute() {
        let roster = school();
        let collation = Collation::root().unwrap();
        for key in SortKey::ALL {
            for house in KNOWN_HOUSES {
                let filter = HouseFilter::House(house);
                let sorted_first = render_view(&roster, Some(key), &filter, &collation);

                let mut filtered_first: Vec<&Student> = roster
                    .students()
                    .iter()
                    .filter(|student| filter.matches(student))
                    .collect();
                filtered_first.sort_by(|a, b| collation.compare(key.field(a), key.field(b)));

                assert_eq!(names(&sorted_first), names(&filtered_first), "{key:?} {house}");
            }
        }
    }

    #[test]
    fn unknown_values() {
        let query = ViewQuery {
            sort: Some("favouriteSpell".into()),
            house: Some("Durmstrang".into()),
        };
        assert_eq!(query.sort_key(), None);
        assert_eq!(query.house_filter(), HouseFilter::All);

        let roster = school();
        let view = render_view(
            &roster,
            query.sort_key(),
            &query.house_filter(),
            &Collation::root().unwrap(),
        );
        assert_eq!(names(&view)[0], "Harry Potter");
        assert_eq!(view.len(), roster.len());
    }

    #[test]
    fn defaults() {
        let query = ViewQuery::default();
        assert_eq!(query.sort_key(), Some(SortKey::LastName));
        assert_eq!(query.house_filter(), HouseFilter::All);
        assert_eq!(
            HouseFilter::from_wire(ALL_HOUSES),
            HouseFilter::All
        );
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_wire(key.wire_name()), Some(key));
        }
    }

    #[test]
    fn empty_house_matches_nothing_but_all() {
        let roster = roster_of(&[("Argus Filch", "")]);
        let collation = Collation::root().unwrap();
        for house in KNOWN_HOUSES {
            assert!(render_view(&roster, None, &HouseFilter::House(house), &collation).is_empty());
        }
        assert_eq!(render_view(&roster, None, &HouseFilter::All, &collation).len(), 1);
    }
}

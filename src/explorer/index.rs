use time::Month;

use crate::model::Editorial;

/// Address of one day bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DayKey {
    pub year: i32,
    pub month: Month,
    pub day: u8,
}

/// Year → month → day grouping of a document list.
///
/// Years are kept newest first and days ascending. Months keep the order in
/// which they were first seen in the source list, not calendar order.
/// Buckets hold positions into the list the index was built from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupedIndex {
    years: Vec<YearGroup>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YearGroup {
    pub year: i32,
    pub months: Vec<MonthGroup>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthGroup {
    pub month: Month,
    pub days: Vec<DayGroup>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayGroup {
    pub day: u8,
    pub entries: Vec<usize>,
}

impl GroupedIndex {
    pub fn build(documents: &[Editorial]) -> Self {
        let mut years: Vec<YearGroup> = Vec::new();

        for (pos, doc) in documents.iter().enumerate() {
            let (year, month, day) = (doc.date.year(), doc.date.month(), doc.date.day());

            let yi = match years.iter().position(|y| y.year == year) {
                Some(i) => i,
                None => {
                    years.push(YearGroup {
                        year,
                        months: Vec::new(),
                    });
                    years.len() - 1
                }
            };
            let months = &mut years[yi].months;

            let mi = match months.iter().position(|m| m.month == month) {
                Some(i) => i,
                None => {
                    months.push(MonthGroup {
                        month,
                        days: Vec::new(),
                    });
                    months.len() - 1
                }
            };
            let days = &mut months[mi].days;

            match days.iter_mut().find(|d| d.day == day) {
                Some(d) => d.entries.push(pos),
                None => days.push(DayGroup {
                    day,
                    entries: vec![pos],
                }),
            }
        }

        years.sort_by(|a, b| b.year.cmp(&a.year));
        for y in &mut years {
            for m in &mut y.months {
                m.days.sort_by_key(|d| d.day);
            }
        }

        Self { years }
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn years(&self) -> &[YearGroup] {
        &self.years
    }

    pub fn year(&self, year: i32) -> Option<&YearGroup> {
        self.years.iter().find(|y| y.year == year)
    }

    pub fn month(&self, year: i32, month: Month) -> Option<&MonthGroup> {
        self.year(year)?.months.iter().find(|m| m.month == month)
    }

    pub fn day(&self, key: DayKey) -> Option<&DayGroup> {
        self.month(key.year, key.month)?
            .days
            .iter()
            .find(|d| d.day == key.day)
    }

    /// Every indexed position with the bucket it lives in.
    pub fn entries(&self) -> impl Iterator<Item = (DayKey, usize)> + '_ {
        self.years.iter().flat_map(|y| {
            y.months.iter().flat_map(move |m| {
                m.days.iter().flat_map(move |d| {
                    let key = DayKey {
                        year: y.year,
                        month: m.month,
                        day: d.day,
                    };
                    d.entries.iter().map(move |&pos| (key, pos))
                })
            })
        })
    }
}

#[cfg(test)]
#[path = "../tests/explorer/index_tests.rs"]
mod tests;

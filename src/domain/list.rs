//! Ordered collections of areas
//!
//! `AreaList` is the owned, insertion-ordered sequence used to carry sets of
//! screen regions around: monitor layouts, merge results, clipped window
//! footprints.

use log::debug;

use crate::domain::core::Area;
use crate::domain::union::{Strips, UnionAxis};

/// Insertion-ordered list of areas
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaList {
    areas: Vec<Area>,
}

impl AreaList {
    /// Creates an empty list
    pub fn new() -> Self {
        Self { areas: Vec::new() }
    }

    /// Creates an empty list with room for `capacity` areas
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            areas: Vec::with_capacity(capacity),
        }
    }

    /// Appends an area at the end
    pub fn push(&mut self, area: Area) {
        self.areas.push(area);
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Area> {
        self.areas.iter()
    }

    pub fn as_slice(&self) -> &[Area] {
        &self.areas
    }

    pub fn into_vec(self) -> Vec<Area> {
        self.areas
    }

    /// Repeatedly merges pairs of areas along `axis` until nothing changes
    ///
    /// A pair is replaced by its union only when the union is a single area
    /// or when it covers fewer pixels than the pair did (the pair overlapped).
    /// Either way the list shrinks by count or by summed area, so the loop
    /// always ends. Replacements are appended at the end of the list.
    pub fn merged(&self, axis: UnionAxis) -> AreaList {
        let mut areas = self.areas.clone();

        'refine: loop {
            for i in 0..areas.len() {
                for j in i + 1..areas.len() {
                    let (a, b) = (areas[i], areas[j]);
                    let Some(strips) = axis.union(&a, &b) else {
                        continue;
                    };
                    let covered: i64 = strips.iter().map(Area::area).sum();
                    if strips.len() > 1 && covered >= a.area() + b.area() {
                        continue;
                    }

                    debug!("merged {a} and {b} into {} area(s)", strips.len());
                    areas.remove(j);
                    areas.remove(i);
                    areas.extend(strips);
                    continue 'refine;
                }
            }
            break;
        }

        AreaList { areas }
    }

    /// Clips every area to `bounds`, dropping those outside it
    pub fn clipped_to(&self, bounds: &Area) -> AreaList {
        self.areas
            .iter()
            .filter_map(|area| area.intersection(bounds))
            .collect()
    }

    /// Returns the smallest area covering every member
    pub fn bounding_box(&self) -> Option<Area> {
        let (first, rest) = self.areas.split_first()?;
        Some(rest.iter().fold(*first, |acc, area| acc.bounding_box(area)))
    }

    /// Sum of member areas, counting overlaps twice
    pub fn total_area(&self) -> i64 {
        self.areas.iter().map(Area::area).sum()
    }

    /// Returns the first area containing the given point
    pub fn containing(&self, px: i32, py: i32) -> Option<&Area> {
        self.areas.iter().find(|area| area.contains_point(px, py))
    }

    /// Returns the member sharing the most pixels with `target`
    ///
    /// Ties go to the earliest member. Members not touching `target` are
    /// never returned.
    pub fn best_target(&self, target: &Area) -> Option<&Area> {
        self.best_target_index(target).map(|index| &self.areas[index])
    }

    /// Index of the member [`AreaList::best_target`] would return
    pub fn best_target_index(&self, target: &Area) -> Option<usize> {
        let mut best: Option<(usize, i64)> = None;
        for (index, area) in self.areas.iter().enumerate() {
            let Some(shared) = area.intersection(target) else {
                continue;
            };
            let shared = shared.area();
            if best.is_none_or(|(_, current)| shared > current) {
                best = Some((index, shared));
            }
        }
        best.map(|(index, _)| index)
    }
}

impl From<Vec<Area>> for AreaList {
    fn from(areas: Vec<Area>) -> Self {
        Self { areas }
    }
}

impl From<Strips> for AreaList {
    fn from(strips: Strips) -> Self {
        strips.into_iter().collect()
    }
}

impl FromIterator<Area> for AreaList {
    fn from_iter<I: IntoIterator<Item = Area>>(iter: I) -> Self {
        Self {
            areas: iter.into_iter().collect(),
        }
    }
}

impl Extend<Area> for AreaList {
    fn extend<I: IntoIterator<Item = Area>>(&mut self, iter: I) {
        self.areas.extend(iter);
    }
}

impl IntoIterator for AreaList {
    type Item = Area;
    type IntoIter = std::vec::IntoIter<Area>;

    fn into_iter(self) -> Self::IntoIter {
        self.areas.into_iter()
    }
}

impl<'a> IntoIterator for &'a AreaList {
    type Item = &'a Area;
    type IntoIter = std::slice::Iter<'a, Area>;

    fn into_iter(self) -> Self::IntoIter {
        self.areas.iter()
    }
}

//! Ordered, name-keyed catalogs of option descriptors.
//!
//! A catalog is one of a closed set of three shapes behind the single
//! [`OptionDescriptors`] handle: the process-wide empty catalog, a
//! map-backed catalog built from one producer's descriptor list, or a union
//! composing several catalogs into one namespace. Callers never need to know
//! which shape they hold.
//!
//! Catalogs are built once during producer registration and are immutable
//! afterwards; handles are cheap clones sharing the underlying data, so
//! concurrent read-only use needs no locking.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::descriptor::OptionDescriptor;

static EMPTY: Lazy<OptionDescriptors> = Lazy::new(|| OptionDescriptors {
    repr: Arc::new(Repr::Empty),
});

/// An ordered, name-keyed collection of [`OptionDescriptor`]s.
///
/// Lookup by name is exact-match and total; unknown names yield `None`.
/// Iteration order is insertion order for map-backed catalogs and
/// member-concatenation order for unions.
#[derive(Debug, Clone)]
pub struct OptionDescriptors {
    repr: Arc<Repr>,
}

#[derive(Debug)]
enum Repr {
    Empty,
    Map(IndexMap<String, OptionDescriptor>),
    Union(Vec<OptionDescriptors>),
}

impl OptionDescriptors {
    /// The process-wide empty catalog.
    ///
    /// Every call returns the same instance;
    /// [`same_catalog`](Self::same_catalog) holds between any two results.
    pub fn empty() -> Self {
        EMPTY.clone()
    }

    /// Build a catalog from one producer's descriptor list.
    ///
    /// An empty list yields the identical [`empty`](Self::empty) catalog, so
    /// callers may rely on identity to test for emptiness. When a name
    /// repeats, the later descriptor replaces the earlier one's value while
    /// keeping the position of the name's first occurrence.
    pub fn from_descriptors<I>(descriptors: I) -> Self
    where
        I: IntoIterator<Item = OptionDescriptor>,
    {
        let mut map = IndexMap::new();
        for descriptor in descriptors {
            // IndexMap::insert replaces in place, which is exactly the
            // ordering contract: value of the last occurrence, position of
            // the first.
            map.insert(descriptor.name().to_string(), descriptor);
        }
        if map.is_empty() {
            return Self::empty();
        }
        Self {
            repr: Arc::new(Repr::Map(map)),
        }
    }

    /// Compose catalogs into one namespace.
    ///
    /// No members yields [`empty`](Self::empty); a single member is returned
    /// unchanged rather than wrapped. The member *sequence* is copied so
    /// later mutation of the caller's slice cannot affect the union, but the
    /// members themselves are shared, not cloned. Duplicate names across
    /// members are kept as-is: [`get`](Self::get) sees the earliest member's
    /// entry and iteration visits every member's descriptors.
    pub fn union_of(members: &[OptionDescriptors]) -> Self {
        match members {
            [] => Self::empty(),
            [only] => only.clone(),
            _ => Self {
                repr: Arc::new(Repr::Union(members.to_vec())),
            },
        }
    }

    /// Look up a descriptor by exact option name.
    ///
    /// On a union, members are scanned in composition order and the first
    /// match wins.
    pub fn get(&self, name: &str) -> Option<&OptionDescriptor> {
        match &*self.repr {
            Repr::Empty => None,
            Repr::Map(map) => map.get(name),
            Repr::Union(members) => members.iter().find_map(|member| member.get(name)),
        }
    }

    /// Number of descriptors this catalog yields on iteration.
    ///
    /// A union counts every member's descriptors, including names shadowed
    /// by earlier members.
    pub fn len(&self) -> usize {
        match &*self.repr {
            Repr::Empty => 0,
            Repr::Map(map) => map.len(),
            Repr::Union(members) => members.iter().map(OptionDescriptors::len).sum(),
        }
    }

    /// Whether iteration yields nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Start a fresh traversal over this catalog's descriptors.
    ///
    /// Each call yields an independent traversal from the beginning; the
    /// returned iterator is lazy and never materializes a combined
    /// collection for unions.
    pub fn iter(&self) -> Descriptors<'_> {
        let state = match &*self.repr {
            Repr::Empty => State::Empty,
            Repr::Map(map) => State::Map(map.values()),
            Repr::Union(members) => State::Union {
                members,
                member: 0,
                current: None,
            },
        };
        Descriptors {
            lookahead: None,
            state,
        }
    }

    /// Whether `other` is the same catalog instance as this handle.
    pub fn same_catalog(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.repr, &other.repr)
    }
}

impl Default for OptionDescriptors {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a> IntoIterator for &'a OptionDescriptors {
    type Item = &'a OptionDescriptor;
    type IntoIter = Descriptors<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Traversal over a catalog's descriptors.
///
/// Unions are walked with an explicit state machine: the index of the
/// current member, a cursor into that member, and at most one buffered
/// lookahead descriptor filled by [`peek`](Descriptors::peek). Exhaustion is
/// signalled through the iterator protocol; once `next` returns `None` it
/// keeps returning `None`.
pub struct Descriptors<'a> {
    lookahead: Option<&'a OptionDescriptor>,
    state: State<'a>,
}

enum State<'a> {
    Empty,
    Map(indexmap::map::Values<'a, String, OptionDescriptor>),
    Union {
        members: &'a [OptionDescriptors],
        member: usize,
        current: Option<Box<Descriptors<'a>>>,
    },
}

impl<'a> Descriptors<'a> {
    /// Observe the next descriptor without consuming it.
    ///
    /// Filling the lookahead may advance past exhausted members internally,
    /// but repeated peeks observe the same descriptor and do not change what
    /// `next` returns.
    pub fn peek(&mut self) -> Option<&'a OptionDescriptor> {
        if self.lookahead.is_none() {
            self.lookahead = self.advance();
        }
        self.lookahead
    }

    fn advance(&mut self) -> Option<&'a OptionDescriptor> {
        match &mut self.state {
            State::Empty => None,
            State::Map(values) => values.next(),
            State::Union {
                members,
                member,
                current,
            } => {
                let members: &'a [OptionDescriptors] = *members;
                loop {
                    if let Some(cursor) = current.as_deref_mut() {
                        if let Some(descriptor) = cursor.next() {
                            return Some(descriptor);
                        }
                    }
                    if *member >= members.len() {
                        return None;
                    }
                    *current = Some(Box::new(members[*member].iter()));
                    *member += 1;
                }
            }
        }
    }
}

impl<'a> Iterator for Descriptors<'a> {
    type Item = &'a OptionDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        self.lookahead.take().or_else(|| self.advance())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::OptionKey;
    use crate::option_type::OptionType;

    // Helper to declare a boolean option descriptor
    fn descriptor(name: &str) -> OptionDescriptor {
        let key = OptionKey::new(name, OptionType::new("Boolean", false));
        OptionDescriptor::new(&key)
    }

    fn names(catalog: &OptionDescriptors) -> Vec<&str> {
        catalog.iter().map(OptionDescriptor::name).collect()
    }

    #[test]
    fn test_empty_singleton_identity() {
        assert!(OptionDescriptors::empty().same_catalog(&OptionDescriptors::empty()));
        assert!(OptionDescriptors::default().same_catalog(&OptionDescriptors::empty()));
    }

    #[test]
    fn test_empty_is_total() {
        let empty = OptionDescriptors::empty();
        assert!(empty.get("anything").is_none());
        assert!(empty.is_empty());
        assert_eq!(empty.iter().count(), 0);
        // Restartable: a second traversal is also empty and independent.
        assert_eq!(empty.iter().count(), 0);
    }

    #[test]
    fn test_from_descriptors_empty_returns_singleton() {
        let built = OptionDescriptors::from_descriptors(Vec::new());
        assert!(built.same_catalog(&OptionDescriptors::empty()));
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let catalog = OptionDescriptors::from_descriptors(vec![descriptor("engine.threads")]);
        assert!(catalog.get("engine.threads").is_some());
        assert!(catalog.get("engine.thread").is_none());
        assert!(catalog.get("Engine.Threads").is_none());
    }

    #[test]
    fn test_insertion_order_iteration() {
        let catalog = OptionDescriptors::from_descriptors(vec![
            descriptor("gamma"),
            descriptor("alpha"),
            descriptor("beta"),
        ]);
        insta::assert_snapshot!(
            format!("{:?}", names(&catalog)),
            @r#"["gamma", "alpha", "beta"]"#
        );
    }

    #[test]
    fn test_duplicate_name_last_value_first_position() {
        let catalog = OptionDescriptors::from_descriptors(vec![
            descriptor("alpha").with_help("first"),
            descriptor("beta"),
            descriptor("alpha").with_help("second"),
        ]);

        // Value of the last occurrence.
        assert_eq!(catalog.get("alpha").unwrap().help(), "second");
        assert_eq!(catalog.len(), 2);

        // Position of the first occurrence.
        assert_eq!(names(&catalog), vec!["alpha", "beta"]);
        assert_eq!(catalog.iter().next().unwrap().help(), "second");
    }

    #[test]
    fn test_union_of_none_is_empty() {
        assert!(OptionDescriptors::union_of(&[]).same_catalog(&OptionDescriptors::empty()));
    }

    #[test]
    fn test_union_of_one_is_identity() {
        let catalog = OptionDescriptors::from_descriptors(vec![descriptor("alpha")]);
        let union = OptionDescriptors::union_of(std::slice::from_ref(&catalog));
        assert!(union.same_catalog(&catalog));
    }

    #[test]
    fn test_union_iterates_members_in_order() {
        let first = OptionDescriptors::from_descriptors(vec![
            descriptor("alpha"),
            descriptor("beta"),
        ]);
        let second = OptionDescriptors::from_descriptors(vec![descriptor("gamma")]);
        let union = OptionDescriptors::union_of(&[first, second]);

        assert_eq!(names(&union), vec!["alpha", "beta", "gamma"]);
        assert_eq!(union.len(), 3);
    }

    #[test]
    fn test_union_get_first_member_wins() {
        let first = OptionDescriptors::from_descriptors(vec![
            descriptor("shared").with_help("from first"),
        ]);
        let second = OptionDescriptors::from_descriptors(vec![
            descriptor("shared").with_help("from second"),
            descriptor("extra"),
        ]);
        let union = OptionDescriptors::union_of(&[first, second]);

        assert_eq!(union.get("shared").unwrap().help(), "from first");
        assert!(union.get("extra").is_some());
        // Duplicates are never merged out of iteration.
        assert_eq!(names(&union), vec!["shared", "shared", "extra"]);
    }

    #[test]
    fn test_union_skips_empty_members() {
        let empty = OptionDescriptors::empty();
        let populated = OptionDescriptors::from_descriptors(vec![descriptor("alpha")]);
        let union = OptionDescriptors::union_of(&[
            empty.clone(),
            empty.clone(),
            populated,
            empty,
        ]);

        assert_eq!(names(&union), vec!["alpha"]);
    }

    #[test]
    fn test_union_shares_members() {
        let member = OptionDescriptors::from_descriptors(vec![descriptor("alpha")]);
        let mut sequence = vec![member.clone(), OptionDescriptors::empty()];
        let union = OptionDescriptors::union_of(&sequence);

        // The sequence snapshot is defensive; mutating the caller's vec
        // afterwards changes nothing.
        sequence.clear();
        assert_eq!(names(&union), vec!["alpha"]);

        // But the member itself is shared, not cloned.
        let descriptor = union.get("alpha").unwrap();
        let original = member.get("alpha").unwrap();
        assert!(std::ptr::eq(descriptor, original));
    }

    #[test]
    fn test_union_of_unions_concatenates_lazily() {
        let inner = OptionDescriptors::union_of(&[
            OptionDescriptors::from_descriptors(vec![descriptor("alpha")]),
            OptionDescriptors::from_descriptors(vec![descriptor("beta")]),
        ]);
        let outer = OptionDescriptors::union_of(&[
            inner,
            OptionDescriptors::from_descriptors(vec![descriptor("gamma")]),
        ]);

        assert_eq!(names(&outer), vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_union_traversal_restartable() {
        let union = OptionDescriptors::union_of(&[
            OptionDescriptors::from_descriptors(vec![descriptor("alpha")]),
            OptionDescriptors::from_descriptors(vec![descriptor("beta")]),
        ]);

        let first_pass = names(&union);
        let second_pass = names(&union);
        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn test_peek_is_idempotent() {
        let union = OptionDescriptors::union_of(&[
            OptionDescriptors::from_descriptors(vec![descriptor("alpha")]),
            OptionDescriptors::from_descriptors(vec![descriptor("beta")]),
        ]);

        let mut iter = union.iter();
        assert_eq!(iter.peek().unwrap().name(), "alpha");
        assert_eq!(iter.peek().unwrap().name(), "alpha");
        assert_eq!(iter.next().unwrap().name(), "alpha");

        // Peeking across the member boundary neither skips nor duplicates.
        assert_eq!(iter.peek().unwrap().name(), "beta");
        assert_eq!(iter.peek().unwrap().name(), "beta");
        assert_eq!(iter.next().unwrap().name(), "beta");

        assert!(iter.peek().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_exhausted_traversal_stays_exhausted() {
        let union = OptionDescriptors::union_of(&[
            OptionDescriptors::from_descriptors(vec![descriptor("alpha")]),
            OptionDescriptors::empty(),
        ]);

        let mut iter = union.iter();
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
        assert!(iter.peek().is_none());
    }
}

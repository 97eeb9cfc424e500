use std::fmt;

#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum RefType {
    Catalog,
    PageTree,
    Page(usize),
    ContentForPage(usize),
    Info,
}

/// An indirect object number, displayed as a reference (`N 0 R`)
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Copy, Clone, Debug)]
pub struct Ref(usize);

impl Ref {
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for Ref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} 0 R", self.0)
    }
}

/// Object numbering for a document with a known page count. Numbers follow
/// a fixed layout: catalog 1, page tree 2, then a page / content stream pair
/// per page (`3 + 2i`, `4 + 2i`), then the optional info dictionary.
#[derive(Copy, Clone, Debug)]
pub struct ObjectReferences {
    page_count: usize,
    has_info: bool,
}

impl ObjectReferences {
    pub fn new(page_count: usize, has_info: bool) -> ObjectReferences {
        ObjectReferences {
            page_count,
            has_info,
        }
    }

    pub fn get(&self, ref_type: RefType) -> Ref {
        match ref_type {
            RefType::Catalog => Ref(1),
            RefType::PageTree => Ref(2),
            RefType::Page(i) => Ref(3 + i * 2),
            RefType::ContentForPage(i) => Ref(4 + i * 2),
            RefType::Info => Ref(3 + self.page_count * 2),
        }
    }

    /// The info dictionary reference, if the document has one
    pub fn info(&self) -> Option<Ref> {
        self.has_info.then(|| self.get(RefType::Info))
    }

    /// References to every page, in page order
    pub fn pages(&self) -> impl Iterator<Item = Ref> + '_ {
        (0..self.page_count).map(|i| self.get(RefType::Page(i)))
    }

    /// How many indirect objects the document contains
    pub fn count(&self) -> usize {
        2 + self.page_count * 2 + usize::from(self.has_info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_and_contents_are_paired() {
        let refs = ObjectReferences::new(3, false);
        for i in 0..3 {
            let page = refs.get(RefType::Page(i)).get();
            assert_eq!(refs.get(RefType::ContentForPage(i)).get(), page + 1);
        }
        assert_eq!(refs.get(RefType::Page(2)), Ref(7));
        assert_eq!(refs.count(), 8);
        assert_eq!(refs.info(), None);
    }

    #[test]
    fn info_follows_the_last_content_stream() {
        let refs = ObjectReferences::new(2, true);
        assert_eq!(refs.info(), Some(Ref(7)));
        assert_eq!(refs.count(), 7);

        let empty = ObjectReferences::new(0, true);
        assert_eq!(empty.info(), Some(Ref(3)));
        assert_eq!(empty.count(), 3);
    }

    #[test]
    fn displays_as_indirect_reference() {
        let refs = ObjectReferences::new(1, false);
        assert_eq!(refs.get(RefType::Page(0)).to_string(), "3 0 R");
        let kids: Vec<String> = refs.pages().map(|r| r.to_string()).collect();
        assert_eq!(kids, vec!["3 0 R"]);
    }
}

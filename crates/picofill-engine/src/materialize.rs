//! Image materialization
//!
//! Idempotent create-or-update of the single `img` child a placeholder
//! owns. Attribute writes are skipped when the value is unchanged, so a
//! repeated pass never retriggers a fetch or layout.

use picofill_dom::{Attribute, DomError, DomResult, DomTree, Node, NodeId};

/// The concrete image resolved for a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedImage {
    /// Image source. `None` or empty means "intentionally no image for
    /// this viewport": an existing image child is removed.
    pub src: Option<String>,
    /// Alternative text, written only when the image is first created
    pub alt: String,
}

/// Writes resolved images into placeholders, replacing nodes only when
/// the host cannot append into the placeholder tag.
#[derive(Debug, Clone, Copy)]
pub struct ImageMaterializer {
    inline_append: bool,
}

impl ImageMaterializer {
    pub fn new(inline_append: bool) -> Self {
        Self { inline_append }
    }

    /// Create or update the single image child of `picture`.
    pub fn upsert(
        &self,
        tree: &mut DomTree,
        picture: NodeId,
        resolved: &ResolvedImage,
    ) -> DomResult<()> {
        let existing = tree.elements_by_tag(picture, "img").into_iter().next();

        let src = match resolved.src.as_deref() {
            Some(src) if !src.is_empty() => src,
            _ => {
                if let Some(img) = existing {
                    let parent = tree.parent(img).ok_or(DomError::NotFound)?;
                    tree.remove_child(parent, img)?;
                }
                return Ok(());
            }
        };

        match existing {
            Some(img) => {
                if tree.attr(img, "src") != Some(src) {
                    tree.set_attr(img, "src", src)?;
                }
                Ok(())
            }
            None => self.attach_new(tree, picture, src, &resolved.alt),
        }
    }

    fn attach_new(
        &self,
        tree: &mut DomTree,
        picture: NodeId,
        src: &str,
        alt: &str,
    ) -> DomResult<()> {
        let img = tree.create_element("img");
        tree.set_attr(img, "alt", alt)?;
        tree.set_attr(img, "src", src)?;

        if self.inline_append {
            tree.append_child(picture, img)?;
            return Ok(());
        }
        self.rebuild_placeholder(tree, picture, img)
    }

    /// Legacy-host path: the placeholder cannot take new children, so an
    /// equivalent element carrying its attributes and children (plus the
    /// image) is swapped in at the same tree position.
    fn rebuild_placeholder(
        &self,
        tree: &mut DomTree,
        picture: NodeId,
        img: NodeId,
    ) -> DomResult<()> {
        let tag = tree
            .tag(picture)
            .ok_or(DomError::InvalidNodeType)?
            .to_string();
        let attrs: Vec<Attribute> = tree
            .get(picture)
            .and_then(Node::as_element)
            .map(|element| element.attrs.clone())
            .unwrap_or_default();
        let children: Vec<NodeId> = tree.children(picture).map(|(id, _)| id).collect();
        let parent = tree.parent(picture).ok_or(DomError::NotFound)?;

        let replacement = tree.create_element(&tag);
        for attr in &attrs {
            tree.set_attr(replacement, &attr.name, &attr.value)?;
        }
        for child in children {
            tree.append_child(replacement, child)?;
        }
        tree.append_child(replacement, img)?;
        tree.replace_child(parent, replacement, picture)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picture_in_tree(tree: &mut DomTree) -> NodeId {
        let root = tree.root();
        let picture = tree.create_element("picture");
        tree.append_child(root, picture).unwrap();
        picture
    }

    fn resolved(src: &str, alt: &str) -> ResolvedImage {
        ResolvedImage {
            src: Some(src.to_string()),
            alt: alt.to_string(),
        }
    }

    #[test]
    fn test_creates_image_with_alt_and_src() {
        let mut tree = DomTree::new();
        let picture = picture_in_tree(&mut tree);
        let materializer = ImageMaterializer::new(true);

        materializer
            .upsert(&mut tree, picture, &resolved("a.gif", "kitten"))
            .unwrap();

        let imgs = tree.elements_by_tag(picture, "img");
        assert_eq!(imgs.len(), 1);
        assert_eq!(tree.attr(imgs[0], "src"), Some("a.gif"));
        assert_eq!(tree.attr(imgs[0], "alt"), Some("kitten"));
    }

    #[test]
    fn test_second_upsert_updates_src_never_alt() {
        let mut tree = DomTree::new();
        let picture = picture_in_tree(&mut tree);
        let materializer = ImageMaterializer::new(true);

        materializer
            .upsert(&mut tree, picture, &resolved("a.gif", "kitten"))
            .unwrap();
        materializer
            .upsert(&mut tree, picture, &resolved("b.gif", "different alt"))
            .unwrap();

        let imgs = tree.elements_by_tag(picture, "img");
        assert_eq!(imgs.len(), 1, "upsert must not duplicate the image");
        assert_eq!(tree.attr(imgs[0], "src"), Some("b.gif"));
        assert_eq!(tree.attr(imgs[0], "alt"), Some("kitten"));
    }

    #[test]
    fn test_empty_src_removes_image() {
        let mut tree = DomTree::new();
        let picture = picture_in_tree(&mut tree);
        let materializer = ImageMaterializer::new(true);

        materializer
            .upsert(&mut tree, picture, &resolved("a.gif", ""))
            .unwrap();
        materializer
            .upsert(&mut tree, picture, &ResolvedImage::default())
            .unwrap();

        assert!(tree.elements_by_tag(picture, "img").is_empty());
    }

    #[test]
    fn test_empty_src_without_image_is_noop() {
        let mut tree = DomTree::new();
        let picture = picture_in_tree(&mut tree);
        let materializer = ImageMaterializer::new(true);

        materializer
            .upsert(&mut tree, picture, &ResolvedImage::default())
            .unwrap();

        assert!(tree.elements_by_tag(picture, "img").is_empty());
    }

    #[test]
    fn test_replace_mode_rebuilds_placeholder() {
        let mut tree = DomTree::new();
        let picture = picture_in_tree(&mut tree);
        tree.set_attr(picture, "data-default-src", "d.gif").unwrap();
        let source = tree.create_element("source");
        tree.set_attr(source, "srcset", "a.gif").unwrap();
        tree.append_child(picture, source).unwrap();

        let materializer = ImageMaterializer::new(false);
        materializer
            .upsert(&mut tree, picture, &resolved("a.gif", "kitten"))
            .unwrap();

        // The original placeholder is gone from the document...
        assert_eq!(tree.parent(picture), None);

        // ...and its replacement carries attributes, children, and image.
        let pictures = tree.elements_by_tag(tree.root(), "picture");
        assert_eq!(pictures.len(), 1);
        let rebuilt = pictures[0];
        assert_eq!(tree.attr(rebuilt, "data-default-src"), Some("d.gif"));
        assert_eq!(tree.elements_by_tag(rebuilt, "source"), vec![source]);
        let imgs = tree.elements_by_tag(rebuilt, "img");
        assert_eq!(imgs.len(), 1);
        assert_eq!(tree.attr(imgs[0], "src"), Some("a.gif"));
    }
}

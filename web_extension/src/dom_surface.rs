use dugout_core::render::{Region, RenderTarget};
use web_sys::{Document, Element};

/// Render target backed by elements of the host page, looked up by id.
///
/// Regions whose element is missing are skipped.
pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn element(&self, region: Region) -> Option<Element> {
        let element = self.document.get_element_by_id(region.element_id());
        if element.is_none() {
            log::trace!("no element for region {:?}", region);
        }
        element
    }

    /// Ids of regions the page does not provide.
    pub fn missing_regions(&self) -> Vec<&'static str> {
        Region::ALL
            .iter()
            .filter(|region| self.document.get_element_by_id(region.element_id()).is_none())
            .map(|region| region.element_id())
            .collect()
    }
}

impl RenderTarget for DomSurface {
    fn set_text(&mut self, region: Region, text: &str) {
        if let Some(el) = self.element(region) {
            el.set_text_content(Some(text));
        }
    }

    fn set_html(&mut self, region: Region, html: &str) {
        if let Some(el) = self.element(region) {
            el.set_inner_html(html);
        }
    }

    fn toggle_class(&mut self, region: Region, class: &str, on: bool) {
        if let Some(el) = self.element(region) {
            let _ = el.class_list().toggle_with_force(class, on);
        }
    }

    fn set_class_name(&mut self, region: Region, class_name: &str) {
        if let Some(el) = self.element(region) {
            el.set_class_name(class_name);
        }
    }

    fn prepend_item(&mut self, region: Region, text: &str) {
        let Some(list) = self.element(region) else {
            return;
        };
        match self.document.create_element("li") {
            Ok(item) => {
                item.set_text_content(Some(text));
                if let Err(err) = list.prepend_with_node_1(&item) {
                    log::warn!("failed to prepend timeline item: {:?}", err);
                }
            }
            Err(err) => log::warn!("failed to create timeline item: {:?}", err),
        }
    }

    fn clear(&mut self, region: Region) {
        if let Some(el) = self.element(region) {
            el.set_inner_html("");
        }
    }
}

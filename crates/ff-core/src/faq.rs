//! Frequently asked questions shown below the studio.

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "How do I design a team t-shirt?",
        answer: "Start by selecting 'Shirt' from the garment types, then use the text tool to add your team name. Consider using contrasting colors and keep the design simple for better printing results.",
    },
    FaqEntry {
        question: "Can I upload transparent logos?",
        answer: "Yes! Upload PNG files with transparent backgrounds using the Image tool. The transparent areas will blend seamlessly with your garment color.",
    },
    FaqEntry {
        question: "What is the best image resolution?",
        answer: "For best print quality, use images with at least 300 DPI resolution. Recommended sizes: 2000x2000 pixels for large designs, 1000x1000 for smaller logos.",
    },
    FaqEntry {
        question: "How can I print this on organic cotton?",
        answer: "Add a note in the 'Notes to Manufacturer' section specifying organic cotton. Different fabrics may affect color vibrancy and printing techniques.",
    },
    FaqEntry {
        question: "What formats can I export my design in?",
        answer: "Currently you can export as PNG or SVG. SVG is recommended for vector graphics and scalability, while PNG works best for complex designs with photos.",
    },
    FaqEntry {
        question: "How do I get a quote from the factory?",
        answer: "After placing your order, our system will connect you with verified manufacturers who can provide quotes based on your design, quantity, and fabric preferences.",
    },
];

/// Accordion state: at most one entry expanded.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaqAccordion {
    expanded: Option<usize>,
}

impl FaqAccordion {
    pub fn expanded(&self) -> Option<&'static FaqEntry> {
        self.expanded.map(|i| &FAQ[i])
    }

    pub fn expanded_index(&self) -> Option<usize> {
        self.expanded
    }

    /// Expand `index`, or collapse it if already open.
    pub fn toggle(&mut self, index: usize) {
        if index >= FAQ.len() {
            return;
        }
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_entry_open() {
        let mut faq = FaqAccordion::default();
        faq.toggle(1);
        faq.toggle(3);
        assert_eq!(faq.expanded_index(), Some(3));
        faq.toggle(3);
        assert_eq!(faq.expanded_index(), None);
    }

    #[test]
    fn out_of_range_ignored() {
        let mut faq = FaqAccordion::default();
        faq.toggle(FAQ.len());
        assert!(faq.expanded().is_none());
    }
}

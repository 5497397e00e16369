//! Interactive labeling session.
//!
//! Walks the normalized subdirectory in filename order and drives a small
//! per-image state machine: the image is displayed, the class menu is
//! printed, and the session blocks on operator input until a valid 1-based
//! class index arrives. There is no cancel path; invalid input re-prompts
//! indefinitely. Exactly one image is in flight at a time.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::warn;

use crate::classes::ClassList;
use crate::discover;
use crate::error::ClassprepError;
use crate::operator::{ImageDisplay, OperatorInput};

/// Mapping from normalized image filename to its assigned class name.
pub type ImageClassMapping = BTreeMap<String, String>;

/// Per-image labeling states.
enum ImageState {
    Displayed,
    AwaitingChoice,
    Classified(String),
}

/// One interactive labeling session over a normalized directory.
pub struct LabelingSession<'a> {
    display: &'a mut dyn ImageDisplay,
    input: &'a mut dyn OperatorInput,
}

impl<'a> LabelingSession<'a> {
    pub fn new(display: &'a mut dyn ImageDisplay, input: &'a mut dyn OperatorInput) -> Self {
        Self { display, input }
    }

    /// Label every canonical-format image in `dir`.
    ///
    /// Every image that can be decoded receives exactly one mapping entry
    /// before this returns. An image that fails to decode is logged and
    /// skipped; it keeps no entry and stays in the normalized directory.
    pub fn label_all(
        &mut self,
        dir: &Path,
        classes: &ClassList,
    ) -> Result<ImageClassMapping, ClassprepError> {
        let mut mapping = ImageClassMapping::new();

        for path in discover::list_canonical(dir)? {
            let file_name = match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => name.to_string(),
                None => continue,
            };

            let img = match image::open(&path) {
                Ok(img) => img,
                Err(err) => {
                    warn!("skipping undecodable image {}: {}", path.display(), err);
                    continue;
                }
            };

            let class = self.label_one(&img, &file_name, classes)?;
            println!("{file_name} -> {class}");
            mapping.insert(file_name, class);
        }

        Ok(mapping)
    }

    /// Drive one image through Displayed -> AwaitingChoice -> Classified.
    fn label_one(
        &mut self,
        img: &image::DynamicImage,
        file_name: &str,
        classes: &ClassList,
    ) -> Result<String, ClassprepError> {
        let mut state = ImageState::Displayed;

        loop {
            state = match state {
                ImageState::Displayed => {
                    self.display.show(img, &format!("Image: {file_name}"))?;
                    print!("{}", classes.menu());
                    ImageState::AwaitingChoice
                }
                ImageState::AwaitingChoice => {
                    let line = self.input.read_line("Select the class number for this image: ")?;
                    match line.trim().parse::<usize>() {
                        Ok(index) => match classes.get(index) {
                            Some(class) => ImageState::Classified(class.to_string()),
                            None => {
                                println!("Invalid class number. Please try again.");
                                ImageState::AwaitingChoice
                            }
                        },
                        Err(_) => {
                            println!("Invalid input. Please enter a number.");
                            ImageState::AwaitingChoice
                        }
                    }
                }
                ImageState::Classified(class) => return Ok(class),
            };
        }
    }
}

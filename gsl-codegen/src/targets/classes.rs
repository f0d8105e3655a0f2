//! SDK classes, one file per class.

use gsl_model::{Class, Model};

use crate::{
    builder::LineBuilder,
    js::params,
    paths,
    target::{GeneratedFile, Target, TargetKind},
};

/// Renders `<classes>/<Class>.js` for every class.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassesTarget;

impl Target for ClassesTarget {
    fn kind(&self) -> TargetKind {
        TargetKind::Classes
    }

    fn render(&self, model: &Model) -> Vec<GeneratedFile> {
        model
            .classes
            .iter()
            .map(|class| {
                GeneratedFile::new(
                    paths::class_file(&model.paths, &class.name),
                    render_class(model, class),
                )
            })
            .collect()
    }
}

fn render_class(model: &Model, class: &Class) -> Vec<String> {
    let mut b = LineBuilder::javascript();
    b.line("// @flow")
        .line("/* eslint-disable */")
        .line("// DO NOT DELETE GSL TAGS")
        .blank();
    b.region(&format!("{}-imports", class.name), |b| {
        // Base classes declared in the same model live next to this file.
        if let Some(base) = class
            .extends
            .as_deref()
            .filter(|base| model.class(base).is_some())
        {
            b.line(format!("import {base} from './{base}';"));
        }
        b.blank();
    });
    b.blank();

    let header = match &class.extends {
        Some(base) => format!("export default class {} extends {base} {{", class.name),
        None => format!("export default class {} {{", class.name),
    };
    b.block(header, "}", |b| {
        b.block("constructor() {", "}", |b| {
            if class.extends.is_some() {
                b.line("super();");
            }
            b.region(&format!("{}-constructor", class.name), |b| {
                b.blank();
            });
        });

        for method in &class.methods {
            let asyncness = if method.is_async { "async " } else { "" };
            b.blank();
            b.block(
                format!("{asyncness}{}({}) {{", method.name, params(&method.args)),
                "}",
                |b| {
                    b.region(&format!("{}-body-{}", class.name, method.name), |b| {
                        b.line("// Your method code goes here");
                    });
                },
            );
        }

        // Only the class close may follow: trailing text after an insertion
        // point must not depend on the model.
        b.blank();
        b.insertion_point(&format!("{}-fields", class.name));
    });
    b.build()
}

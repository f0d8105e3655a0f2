//! Rendering a full model and regenerating it on disk.

use std::{fs, str::FromStr};

use gsl_codegen::{Generator, TargetKind};
use gsl_core::WriteResult;
use gsl_model::Model;
use gsl_regen::{ParseMode, RegenerationEngine, RegionParser};
use tempfile::TempDir;

const HEDGEHOG: &str = r#"
    [project]
    name = "hedgehog-ide"

    [[modules]]
    name = "hedgehog"

    [[modules.blocks]]
    name = "hedgehog_read_analog"
    output = "Number"
    args = [{ type = "field_number", name = "PORT", value = 0, min = 0, max = 15 }]
    langs.en = { msg = "analog port %1", tooltip = "get analog value" }

    [[modules.blocks]]
    name = "hedgehog_move"
    colour = 240
    args = [
        { type = "field_number", name = "PORT", value = 0 },
        { type = "input_value", name = "POWER", check = "Number" },
    ]

    [[modules.functions]]
    name = "moveMotor"
    args = [{ name = "port", type = "number" }, { name = "power", type = "number" }]

    [[modules.functions]]
    name = "getAnalog"
    has_reply = true
    args = [{ name = "port", type = "number" }]

    [[classes]]
    name = "Hedgehog"

    [[classes.methods]]
    name = "move"
    args = [{ name = "port", type = "number" }, { name = "power", type = "number" }]
"#;

fn model(toml: &str) -> Model {
    Model::from_str(toml).expect("Failed to parse model")
}

#[test]
fn test_every_rendered_file_parses() {
    let model = model(HEDGEHOG);
    let files = Generator::all().render(&model);
    assert_eq!(files.len(), 5);

    for file in &files {
        let parser = RegionParser::new(file.path.display().to_string(), ParseMode::Rendered);
        let doc = parser
            .parse(file.lines.as_slice())
            .expect("Rendered file should parse");
        assert!(!doc.regions().is_empty(), "{} has no regions", file.path.display());
    }
}

#[test]
fn test_block_file_snapshot() {
    let model = model(HEDGEHOG);
    let files = Generator::new(&[TargetKind::Blocks]).render(&model);
    let analog = files
        .iter()
        .find(|f| f.path.ends_with("hedgehog_read_analog.js"))
        .expect("Missing block file");

    insta::assert_snapshot!(analog.content(), @r#"
    // @flow
    /* eslint-disable */

    import * as React from 'react';
    import Blockly from 'blockly';

    import { type Block } from '..';

    const HEDGEHOG_READ_ANALOG: Block = {
      blockJson: {
        type: 'hedgehog_read_analog',
        message0: 'analog port %1',
        args0: [
          {
            "type": "field_number",
            "name": "PORT",
            "value": 0,
            "min": 0,
            "max": 15
          }
        ],
        output: 'Number',
        colour: 120,
        tooltip: 'get analog value',
        helpUrl: 'TODO',
      },
      generators: {
        JavaScript: block => {
          const port = block.getFieldValue('PORT');
          // <default GSL customizable: hedgehog_read_analog-body>
          // TODO generate code
          const code = '';
          return [code, Blockly.JavaScript.ORDER_NONE];
          // </GSL customizable: hedgehog_read_analog-body>
        },
      },
      toolboxBlocks: {
        default: () => (
          <block type="hedgehog_read_analog">{
            // <default GSL customizable: hedgehog_read_analog-default-toolbox />
          }</block>
        ),
        // <default GSL customizable: hedgehog_read_analog-extra-toolbox />
      },
    };

    export default HEDGEHOG_READ_ANALOG;
    "#);
}

#[test]
fn test_input_values_read_inside_body() {
    let model = model(HEDGEHOG);
    let files = Generator::new(&[TargetKind::Blocks]).render(&model);
    let moves = files
        .iter()
        .find(|f| f.path.ends_with("hedgehog_move.js"))
        .expect("Missing block file");

    let body_start = moves
        .lines
        .iter()
        .position(|l| l.ends_with("<default GSL customizable: hedgehog_move-body>"))
        .expect("Missing body region");
    assert_eq!(
        moves.lines[body_start - 1],
        "      const port = block.getFieldValue('PORT');"
    );
    assert_eq!(
        moves.lines[body_start + 1],
        "      const power = Blockly.JavaScript.valueToCode(block, 'POWER', Blockly.JavaScript.ORDER_ATOMIC);"
    );
    assert!(moves.lines.contains(&"    colour: 240,".to_string()));
}

#[test]
fn test_bake_preserves_customizations_across_model_changes() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let engine = RegenerationEngine::new();

    let jobs = Generator::all().jobs(&model(HEDGEHOG), temp.path());
    let report = engine.regenerate_all(&jobs);
    assert!(report.is_success());
    assert!(
        report
            .successes()
            .all(|(_, r)| r.result == WriteResult::Created)
    );

    let sdk = temp.path().join("src/sdk/hedgehog.js");
    let edited = fs::read_to_string(&sdk)
        .expect("Failed to read sdk file")
        .replace(
            "    // Your function code goes here\n\n    // </GSL customizable: hedgehog-body-moveMotor>",
            "    await motors.set(port, power);\n    // </GSL customizable: hedgehog-body-moveMotor>",
        );
    assert!(edited.contains("await motors.set(port, power);"));
    fs::write(&sdk, &edited).expect("Failed to write sdk file");

    let extended = HEDGEHOG.replace(
        "[[classes]]",
        "[[modules.functions]]\n    name = \"beep\"\n\n    [[classes]]",
    );
    let jobs = Generator::all().jobs(&model(&extended), temp.path());
    let report = engine.regenerate_all(&jobs);
    assert!(report.is_success());
    assert_eq!(report.warnings().count(), 0);

    let regenerated = fs::read_to_string(&sdk).expect("Failed to read sdk file");
    assert!(regenerated.contains("    await motors.set(port, power);\n"));
    assert!(regenerated.contains("<default GSL customizable: hedgehog-body-beep>"));
    assert!(regenerated.contains("'hedgehog_beep': ({}) => beep(),"));

    let unchanged = report
        .successes()
        .filter(|(_, r)| r.result == WriteResult::Unchanged)
        .count();
    assert_eq!(unchanged, 3);
}

#[test]
fn test_removed_function_reports_orphan() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let engine = RegenerationEngine::new();
    let jobs = Generator::new(&[TargetKind::Sdk]).jobs(&model(HEDGEHOG), temp.path());
    assert!(engine.regenerate_all(&jobs).is_success());

    let reduced = HEDGEHOG.replace(
        "[[modules.functions]]\n    name = \"getAnalog\"\n    has_reply = true\n    args = [{ name = \"port\", type = \"number\" }]\n",
        "",
    );
    assert_ne!(reduced, HEDGEHOG);
    let jobs = Generator::new(&[TargetKind::Sdk]).jobs(&model(&reduced), temp.path());
    let report = engine.regenerate_all(&jobs);

    let warnings: Vec<_> = report.warnings().collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].region_id, "hedgehog-body-getAnalog");
}

#[test]
fn test_toggling_extends_regenerates_constructor() {
    const ROBOT: &str = r#"
    [project]
    name = "ide"

    [[classes]]
    name = "Robot"
    "#;

    let temp = TempDir::new().expect("Failed to create temp dir");
    let engine = RegenerationEngine::new();
    let classes = Generator::new(&[TargetKind::Classes]);
    let path = temp.path().join("src/sdk/classes/Robot.js");

    assert!(engine.regenerate_all(&classes.jobs(&model(ROBOT), temp.path())).is_success());
    let appended = fs::read_to_string(&path)
        .expect("Failed to read class file")
        .replace(
            "  // <default GSL customizable: Robot-fields />\n",
            "  // <default GSL customizable: Robot-fields />\n  speed = 0;\n",
        );
    assert!(appended.contains("  speed = 0;\n"));
    fs::write(&path, &appended).expect("Failed to write class file");

    let derived = model(&ROBOT.replace(
        "name = \"Robot\"",
        "name = \"Robot\"\n    extends = \"EventEmitter\"",
    ));
    let report = engine.regenerate_all(&classes.jobs(&derived, temp.path()));
    assert!(report.is_success());
    assert_eq!(report.warnings().count(), 0);

    let content = fs::read_to_string(&path).expect("Failed to read class file");
    assert_eq!(content.matches("constructor() {").count(), 1);
    assert!(content.contains("export default class Robot extends EventEmitter {"));
    assert!(content.contains("  constructor() {\n    super();\n"));
    assert!(content.contains("  // <default GSL customizable: Robot-fields />\n  speed = 0;\n}"));

    let report = engine.regenerate_all(&classes.jobs(&derived, temp.path()));
    assert!(
        report
            .successes()
            .all(|(_, r)| r.result == WriteResult::Unchanged)
    );
    assert_eq!(
        fs::read_to_string(&path).expect("Failed to read class file"),
        content
    );
}

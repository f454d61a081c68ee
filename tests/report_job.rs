// 该文件是 Shanan QC （山南西风） 项目的一部分。
// tests/report_job.rs - 从任务导出文件到报告的完整流程
//
// 本文件根据 Apache 许可证第 2.0 版（以下简称“许可证”）授权使用；
// 除非遵守该许可证条款，否则您不得使用本文件。
// 您可通过以下网址获取许可证副本：
// http://www.apache.org/licenses/LICENSE-2.0
// 除非适用法律要求或书面同意，根据本许可协议分发的软件均按“原样”提供，
// 不附带任何形式的明示或暗示的保证或条件。
// 有关许可权限与限制的具体条款，请参阅本许可协议。
//
// Copyright (C) 2026 Johann Li <me@qinka.pro>, Wareless Group

use serde_json::{Value, json};
use url::Url;

use shanan_qc::{
  check::TaskValidator,
  input::{InputWrapper, SourceOptions},
  job::{Job, ReportJob},
  output::OutputWrapper,
};

fn sign(label: &str, left: f64, top: f64, width: f64, height: f64, bg: &str) -> Value {
  json!({
    "label": label,
    "left": left, "top": top, "width": width, "height": height,
    "attributes": { "occlusion": "25%", "truncation": "0%", "background_color": bg }
  })
}

fn dump() -> Value {
  json!({ "docs": [
    {
      "task_id": "clean",
      "params": {
        "attachment": "https://cdn.example.com/clean.jpg",
        "attachment_metadata": { "width": 640, "height": 480 }
      },
      "response": { "annotations": [
        sign("information_sign", 10.0, 10.0, 60.0, 30.0, "green"),
        sign("construction_sign", 200.0, 100.0, 40.0, 40.0, "orange")
      ]}
    },
    {
      "task_id": "messy",
      "params": {
        "attachment": "https://cdn.example.com/messy.jpg",
        "attachment_metadata": { "width": 100, "height": 100 }
      },
      "response": { "annotations": [
        sign("non_visible_face", 0.0, 0.0, 95.0, 95.0, "white"),
        { "label": "policy_sign", "left": 0, "top": 0, "width": 2, "height": 2,
          "attributes": { "background_color": "white" } },
        sign("policy_sign", 50.0, 50.0, 20.0, 20.0, "blue"),
        sign("policy_sign", 50.0, 51.0, 20.0, 20.0, "blue")
      ]}
    },
    {
      "task_id": "no-metadata",
      "params": { "attachment": "https://cdn.example.com/x.jpg" },
      "response": { "annotations": [
        sign("construction_sign", 0.0, 0.0, 5000.0, 5000.0, "blue")
      ]}
    }
  ]})
}

fn run(limit: Option<usize>) -> (shanan_qc::job::RunSummary, Value) {
  let dir = tempfile::tempdir().unwrap();
  let dump_path = dir.path().join("dump.json");
  std::fs::write(&dump_path, serde_json::to_vec(&dump()).unwrap()).unwrap();
  let report_path = dir.path().join("quality_issues.json");

  let source = Url::parse(&format!("tasks://{}", dump_path.display())).unwrap();
  let input = InputWrapper::open(&source, &SourceOptions::default()).unwrap();
  let output = OutputWrapper::open(report_path.to_str().unwrap()).unwrap();

  let summary = ReportJob::default()
    .with_limit(limit)
    .run_job(input, TaskValidator::default(), output)
    .unwrap();
  let report = serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
  (summary, report)
}

#[test]
fn report_lists_only_tasks_with_issues() {
  let (summary, report) = run(None);

  assert_eq!(summary.tasks, 3);
  assert_eq!(summary.flagged_tasks, 2);

  let entries = report.as_array().unwrap();
  let ids: Vec<_> = entries.iter().map(|e| e["task_id"].as_str().unwrap()).collect();
  assert_eq!(ids, vec!["messy", "no-metadata"]);

  assert_eq!(
    entries[0],
    json!({
      "task_id": "messy",
      "image_url": "https://cdn.example.com/messy.jpg",
      "num_errors": 3,
      "num_warnings": 2,
      "issues": [
        {
          "severity": "error", "box_id": 0, "check": "bg_color_mismatch",
          "details": "non_visible_face must have background_color = not_applicable"
        },
        {
          "severity": "error", "box_id": 0, "check": "oversized_box",
          "details": "covers >80 percent of image"
        },
        {
          "severity": "error", "box_id": 1, "check": "missing_attribute",
          "details": "occlusion,truncation"
        },
        {
          "severity": "warning", "box_id": 1, "check": "tiny_box",
          "details": "2x2 px"
        },
        {
          "severity": "warning", "box_id_1": 2, "box_id_2": 3, "check": "duplicate_box",
          "details": "IoU > 0.9"
        }
      ]
    })
  );

  // 没有图像尺寸时不检查过大框
  assert_eq!(
    entries[1]["issues"],
    json!([{
      "severity": "warning", "box_id": 0, "check": "bg_color_mismatch",
      "details": "construction_sign usually orange"
    }])
  );
}

#[test]
fn limit_stops_early() {
  let (summary, report) = run(Some(2));
  assert_eq!(summary.tasks, 2);
  assert_eq!(report.as_array().unwrap().len(), 1);
}

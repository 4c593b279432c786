//! Network (`/net`) and IP (`/ip`) records.

use crate::extract::{attribute, extract};
use log::debug;
use serde::Serialize;
use serde_json::Value;

static EMPTY: Value = Value::Null;

#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetBlock {
  pub cidr_length: String,
  pub end_address: String,
  pub description: String,
  #[serde(rename = "type")]
  pub kind: String,
  pub start_address: String,
}

/// Wrapper kept so the rendered JSON reads `"netBlocks": {"netBlock": [...]}`.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetBlocks {
  pub net_block: Vec<NetBlock>,
}

#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrgRef {
  pub handle: String,
  pub name: String,
  pub org_link: String,
}

#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParentNetRef {
  pub handle: String,
  pub name: String,
  pub parent_net_link: String,
}

/// Flattened network record. Field order is the rendered key order.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRecord {
  pub registration_date: String,
  pub rdap_ref: String,
  #[serde(rename = "ref")]
  pub reference: String,
  pub end_address: String,
  pub handle: String,
  pub name: String,
  pub net_blocks: NetBlocks,
  pub org_ref: OrgRef,
  pub parent_net_ref: ParentNetRef,
  pub start_address: String,
  pub update_date: String,
  pub version: String,
}

/// ARIN collapses a one-element list into the bare element. Only used for
/// `netBlock`; other keys are not coerced.
fn one_or_many(value: Option<&Value>) -> Vec<&Value> {
  match value {
    Some(Value::Array(items)) => items.iter().collect(),
    Some(obj @ Value::Object(_)) => vec![obj],
    Some(other) => {
      debug!("ignoring netBlock of unexpected shape: {other}");
      Vec::new()
    }
    None => Vec::new(),
  }
}

fn net_block(entry: &Value) -> NetBlock {
  if !entry.is_object() {
    debug!("netBlock entry is not an object: {entry}");
  }
  NetBlock {
    cidr_length: extract(entry, &["cidrLength"]),
    end_address: extract(entry, &["endAddress"]),
    description: extract(entry, &["description"]),
    kind: extract(entry, &["type"]),
    start_address: extract(entry, &["startAddress"]),
  }
}

/// Normalizes a `/net` or `/ip` envelope. Never fails: a missing or
/// malformed `net` object yields an all-default record.
#[must_use]
pub fn normalize(envelope: &Value) -> NetworkRecord {
  let net = match envelope.get("net") {
    Some(net @ Value::Object(_)) => net,
    Some(_) => {
      debug!("`net` is not an object, using defaults");
      &EMPTY
    }
    None => {
      debug!("envelope has no `net` key, using defaults");
      &EMPTY
    }
  };

  let org_ref = net.get("orgRef").unwrap_or(&EMPTY);
  let parent_net_ref = net.get("parentNetRef").unwrap_or(&EMPTY);
  let blocks = one_or_many(net.get("netBlocks").and_then(|b| b.get("netBlock")))
    .into_iter()
    .map(net_block)
    .collect();

  NetworkRecord {
    registration_date: extract(net, &["registrationDate"]),
    rdap_ref: extract(net, &["rdapRef"]),
    reference: extract(net, &["ref"]),
    end_address: extract(net, &["endAddress"]),
    handle: extract(net, &["handle"]),
    name: extract(net, &["name"]),
    net_blocks: NetBlocks { net_block: blocks },
    org_ref: OrgRef {
      handle: attribute(org_ref, "@handle"),
      name: attribute(org_ref, "@name"),
      org_link: extract(org_ref, &[]),
    },
    parent_net_ref: ParentNetRef {
      handle: attribute(parent_net_ref, "@handle"),
      name: attribute(parent_net_ref, "@name"),
      parent_net_link: extract(parent_net_ref, &[]),
    },
    start_address: extract(net, &["startAddress"]),
    update_date: extract(net, &["updateDate"]),
    version: extract(net, &["version"]),
  }
}

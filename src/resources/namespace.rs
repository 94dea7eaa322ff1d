//! Namespace manifest.

use super::tenant_namespace;

/// Render the tenant's `Namespace`.
pub fn render(tenant: &str) -> String {
    let namespace = tenant_namespace(tenant);
    format!(
        r#"---
apiVersion: v1
kind: Namespace
metadata:
  name: {namespace}
  labels:
    tenant: {tenant}
"#
    )
}

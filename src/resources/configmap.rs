//! ConfigMap manifest. Data is fixed and independent of the tier.

use super::tenant_namespace;

pub fn render(tenant: &str) -> String {
    let namespace = tenant_namespace(tenant);
    format!(
        r#"---
apiVersion: v1
kind: ConfigMap
metadata:
  name: app-config
  namespace: {namespace}
  labels:
    tenant: {tenant}
data:
  database_host: "postgres.example.com"
  database_port: "5432"
  app_mode: "production"
  log_level: "info"
"#
    )
}

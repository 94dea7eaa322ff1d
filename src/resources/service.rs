//! Service manifest.

use super::{tenant_namespace, CONTAINER_PORT};

/// Render the tenant's ClusterIP `Service` in front of the web pods.
pub fn render(tenant: &str) -> String {
    let namespace = tenant_namespace(tenant);
    format!(
        r#"---
apiVersion: v1
kind: Service
metadata:
  name: nginx-service
  namespace: {namespace}
  labels:
    app: web
    tenant: {tenant}
spec:
  type: ClusterIP
  selector:
    app: web
  ports:
  - port: {CONTAINER_PORT}
    targetPort: {CONTAINER_PORT}
    protocol: TCP
"#
    )
}
